//! Token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use fitlink_core::config::AuthConfig;
use fitlink_core::error::AppError;

use super::claims::Claims;

/// Message returned for every unauthenticated request.
pub const UNAUTHENTICATED: &str = "Unauthenticated.";

/// Verifies bearer token signatures and expiry.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decode a token. Every failure is reported to the client the same way.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "Rejected bearer token");
                AppError::authentication(UNAUTHENTICATED)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtEncoder;
    use fitlink_core::error::ErrorKind;
    use fitlink_entity::user::UserRole;
    use uuid::Uuid;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_round_trip() {
        let cfg = config("test-secret");
        let user_id = Uuid::new_v4();
        let session_id = Uuid::new_v4();
        let (token, exp) = JwtEncoder::new(&cfg)
            .encode(user_id, session_id, UserRole::GymOwner, "owner@fitlink.test")
            .unwrap();

        let claims = JwtDecoder::new(&cfg).decode(&token).unwrap();
        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.session_id(), session_id);
        assert_eq!(claims.role, UserRole::GymOwner);
        assert_eq!(claims.expires_at().timestamp(), exp.timestamp());
    }

    #[test]
    fn test_wrong_secret_is_unauthenticated() {
        let (token, _) = JwtEncoder::new(&config("one"))
            .encode(Uuid::new_v4(), Uuid::new_v4(), UserRole::Member, "a@b.test")
            .unwrap();

        let err = JwtDecoder::new(&config("two")).decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, UNAUTHENTICATED);
    }

    #[test]
    fn test_garbage_token() {
        assert!(JwtDecoder::new(&config("x")).decode("not.a.jwt").is_err());
    }
}
