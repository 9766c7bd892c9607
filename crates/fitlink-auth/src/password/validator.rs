//! Policy applied to every new password.

use fitlink_core::config::AuthConfig;
use fitlink_core::error::AppError;

const FIELD: &str = "password";

#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
    min_score: u8,
}

impl PasswordValidator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            min_score: config.password_min_score.min(4),
        }
    }

    /// Check a candidate password, reporting the first rule it breaks.
    ///
    /// `user_inputs` (name, email) are fed to the strength estimator so a
    /// password built from them scores low.
    pub fn validate(&self, password: &str, user_inputs: &[&str]) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::field(
                FIELD,
                format!(
                    "The password must be at least {} characters.",
                    self.min_length
                ),
            ));
        }

        if !password.chars().any(char::is_uppercase) {
            return Err(AppError::field(
                FIELD,
                "The password must contain at least one uppercase letter.",
            ));
        }

        if !password.chars().any(char::is_lowercase) {
            return Err(AppError::field(
                FIELD,
                "The password must contain at least one lowercase letter.",
            ));
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::field(
                FIELD,
                "The password must contain at least one number.",
            ));
        }

        let estimate = zxcvbn::zxcvbn(password, user_inputs);
        if (estimate.score() as u8) < self.min_score {
            return Err(AppError::field(
                FIELD,
                "The given password is too easy to guess. Please choose a different password.",
            ));
        }

        Ok(())
    }

    pub fn validate_not_same(&self, current: &str, new: &str) -> Result<(), AppError> {
        if current == new {
            return Err(AppError::field(
                "new_password",
                "The new password must be different from the current password.",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitlink_core::error::ErrorKind;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    fn field_message(err: &AppError, field: &str) -> String {
        err.details.as_ref().unwrap()["errors"][field][0]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_accepts_strong_password() {
        assert!(validator().validate("Tr4mpoline-Sunset", &[]).is_ok());
    }

    #[test]
    fn test_length_rule() {
        let err = validator().validate("Ab1", &[]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(field_message(&err, "password").contains("at least 8"));
    }

    #[test]
    fn test_character_classes() {
        let v = validator();
        assert!(field_message(&v.validate("lowercase1only", &[]).unwrap_err(), "password")
            .contains("uppercase"));
        assert!(field_message(&v.validate("UPPERCASE1ONLY", &[]).unwrap_err(), "password")
            .contains("lowercase"));
        assert!(field_message(&v.validate("NoDigitsHere", &[]).unwrap_err(), "password")
            .contains("number"));
    }

    #[test]
    fn test_guessable_password_rejected() {
        let err = validator().validate("Password1", &[]).unwrap_err();
        assert!(field_message(&err, "password").contains("too easy"));
    }

    #[test]
    fn test_not_same() {
        let v = validator();
        assert!(v.validate_not_same("Abcdef12", "Abcdef12").is_err());
        assert!(v.validate_not_same("Abcdef12", "Abcdef13").is_ok());
    }
}
