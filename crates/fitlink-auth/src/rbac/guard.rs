//! Route-level role enforcement.

use serde_json::json;

use fitlink_core::error::AppError;
use fitlink_entity::user::UserRole;

/// Admits a caller whose role equals the route's role, or any admin.
#[derive(Debug, Clone, Copy)]
pub struct RoleGuard;

impl RoleGuard {
    pub fn check(actual: UserRole, required: UserRole) -> Result<(), AppError> {
        if actual.satisfies(required) {
            return Ok(());
        }

        Err(
            AppError::authorization("Access denied. Insufficient permissions.").with_details(
                json!({
                    "required_role": required.as_str(),
                    "user_role": actual.as_str(),
                }),
            ),
        )
    }

    /// Passes when the caller has any of `required`.
    pub fn check_any(actual: UserRole, required: &[UserRole]) -> Result<(), AppError> {
        match required.iter().find(|role| actual.satisfies(**role)) {
            Some(_) => Ok(()),
            None => {
                let names: Vec<&str> = required.iter().map(|r| r.as_str()).collect();
                Err(
                    AppError::authorization("Access denied. Insufficient permissions.")
                        .with_details(json!({
                            "required_role": names.join("|"),
                            "user_role": actual.as_str(),
                        })),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitlink_core::error::ErrorKind;

    const ROLES: [UserRole; 4] = [
        UserRole::Member,
        UserRole::Trainer,
        UserRole::GymOwner,
        UserRole::Admin,
    ];

    #[test]
    fn test_admin_passes_everything_others_only_their_own() {
        for actual in ROLES {
            for required in ROLES {
                let allowed = RoleGuard::check(actual, required).is_ok();
                assert_eq!(allowed, actual == required || actual == UserRole::Admin);
            }
        }
    }

    #[test]
    fn test_denial_details() {
        let err = RoleGuard::check(UserRole::Member, UserRole::GymOwner).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        let details = err.details.unwrap();
        assert_eq!(details["required_role"], "gym_owner");
        assert_eq!(details["user_role"], "member");
    }

    #[test]
    fn test_check_any() {
        let staff = [UserRole::GymOwner, UserRole::Trainer];
        assert!(RoleGuard::check_any(UserRole::Trainer, &staff).is_ok());
        assert!(RoleGuard::check_any(UserRole::Admin, &staff).is_ok());
        assert!(RoleGuard::check_any(UserRole::Member, &staff).is_err());
    }
}
