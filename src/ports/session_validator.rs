//! Session validation port for bearer token validation.
//!
//! This is the identity-provider boundary: the only way a request obtains a
//! verified `AuthenticatedUser`. Implementations exist for a JWKS-backed OIDC
//! provider and for tests.
//!
//! # Security Requirements
//!
//! All implementations MUST validate:
//! - **Issuer (iss)**: Token must come from the expected auth provider
//! - **Audience (aud)**: Token must be intended for this application
//! - **Expiry (exp)**: Token must not be expired

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// - `AuthError::InvalidToken` for malformed tokens or bad signatures
/// - `AuthError::TokenExpired` for expired tokens
/// - `AuthError::ServiceUnavailable` for transient provider errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    struct SingleTokenValidator {
        token: &'static str,
        user: AuthenticatedUser,
    }

    #[async_trait]
    impl SessionValidator for SingleTokenValidator {
        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            if token == self.token {
                Ok(self.user.clone())
            } else {
                Err(AuthError::InvalidToken)
            }
        }
    }

    fn validator() -> SingleTokenValidator {
        SingleTokenValidator {
            token: "valid-token-123",
            user: AuthenticatedUser::with_id(UserId::new("user-123").unwrap()),
        }
    }

    #[tokio::test]
    async fn session_validator_returns_user_for_valid_token() {
        let user = validator().validate("valid-token-123").await.unwrap();
        assert_eq!(user.id.as_str(), "user-123");
    }

    #[tokio::test]
    async fn session_validator_returns_error_for_invalid_token() {
        let result = validator().validate("invalid-token").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn session_validator_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SessionValidator>();
    }
}
