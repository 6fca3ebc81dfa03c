//! JWKS-backed bearer token validator.
//!
//! Implements the `SessionValidator` port for any OIDC provider publishing
//! its signing keys as a JSON Web Key Set:
//!
//! 1. The key set is fetched lazily and cached for `auth.jwks_cache_ttl_secs`
//! 2. The token signature is checked against the key named by its `kid`
//! 3. Issuer, audience and expiry are enforced
//! 4. The `sub` claim becomes the domain `UserId`
//!
//! # Example
//!
//! ```ignore
//! let validator = JwksSessionValidator::from_config(&config.auth)?;
//! let user = validator.validate("eyJ...").await?;
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::jwk::{JwkSet, KeyAlgorithm};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Header, Validation};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

const JWKS_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Claims read from an identity token.
#[derive(Debug, Deserialize)]
struct IdentityClaims {
    sub: String,

    #[serde(default)]
    email: Option<String>,

    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    preferred_username: Option<String>,
}

struct CachedKeys {
    jwks: JwkSet,
    fetched_at: Instant,
}

impl CachedKeys {
    fn new(jwks: JwkSet) -> Self {
        Self {
            jwks,
            fetched_at: Instant::now(),
        }
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Production `SessionValidator` checking RSA-signed JWTs against a JWKS.
pub struct JwksSessionValidator {
    issuer: String,
    audience: String,
    jwks_url: String,
    cache_ttl: Duration,
    http_client: reqwest::Client,
    keys: Arc<RwLock<Option<CachedKeys>>>,
}

impl JwksSessionValidator {
    /// Builds a validator from the auth configuration section.
    ///
    /// Keys are not fetched here; the first validation fetches them.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        let http_client = reqwest::Client::builder()
            .timeout(JWKS_FETCH_TIMEOUT)
            .build()
            .map_err(|e| AuthError::service_unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            issuer: config.issuer_url.clone(),
            audience: config.audience.clone(),
            jwks_url: config.resolved_jwks_url(),
            cache_ttl: config.jwks_cache_ttl(),
            http_client,
            keys: Arc::new(RwLock::new(None)),
        })
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, AuthError> {
        tracing::debug!("Fetching JWKS from {}", self.jwks_url);

        let response = self
            .http_client
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch JWKS: {}", e);
                AuthError::service_unavailable(format!("Failed to fetch JWKS: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("JWKS endpoint returned {}", status);
            return Err(AuthError::service_unavailable(format!(
                "JWKS endpoint returned {}",
                status
            )));
        }

        response.json::<JwkSet>().await.map_err(|e| {
            tracing::error!("Failed to parse JWKS: {}", e);
            AuthError::service_unavailable(format!("Failed to parse JWKS: {}", e))
        })
    }

    async fn current_keys(&self) -> Result<JwkSet, AuthError> {
        {
            let cache = self.keys.read().await;
            if let Some(cached) = cache.as_ref().filter(|c| c.is_fresh(self.cache_ttl)) {
                return Ok(cached.jwks.clone());
            }
        }

        let jwks = self.fetch_jwks().await?;
        *self.keys.write().await = Some(CachedKeys::new(jwks.clone()));
        Ok(jwks)
    }

    fn validation(&self, algorithm: Algorithm) -> Validation {
        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iss", "sub", "aud"]);
        validation
    }
}

/// Picks the key named by the token header and its RSA algorithm.
fn decoding_key_for(header: &Header, jwks: &JwkSet) -> Result<(DecodingKey, Algorithm), AuthError> {
    let kid = header.kid.as_deref().ok_or_else(|| {
        tracing::warn!("JWT missing 'kid' header");
        AuthError::InvalidToken
    })?;

    let jwk = jwks.find(kid).ok_or_else(|| {
        tracing::warn!("No matching key found for kid: {}", kid);
        AuthError::InvalidToken
    })?;

    let algorithm = match jwk.common.key_algorithm {
        None | Some(KeyAlgorithm::RS256) => Algorithm::RS256,
        Some(KeyAlgorithm::RS384) => Algorithm::RS384,
        Some(KeyAlgorithm::RS512) => Algorithm::RS512,
        Some(other) => {
            tracing::warn!("Unsupported key algorithm: {:?}", other);
            return Err(AuthError::InvalidToken);
        }
    };

    let key = DecodingKey::from_jwk(jwk).map_err(|e| {
        tracing::warn!("Failed to create decoding key: {}", e);
        AuthError::InvalidToken
    })?;

    Ok((key, algorithm))
}

fn map_decode_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => {
            tracing::warn!("Token validation failed: {}", err);
            AuthError::InvalidToken
        }
    }
}

#[async_trait]
impl SessionValidator for JwksSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let header = decode_header(token).map_err(|e| {
            tracing::debug!("Failed to decode JWT header: {}", e);
            AuthError::InvalidToken
        })?;

        let jwks = self.current_keys().await?;
        let (key, algorithm) = decoding_key_for(&header, &jwks)?;
        let claims = decode::<IdentityClaims>(token, &key, &self.validation(algorithm))
            .map_err(map_decode_error)?
            .claims;

        let user_id = UserId::new(claims.sub).map_err(|_| {
            tracing::warn!("Token carries an empty subject");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(
            user_id,
            claims.email,
            claims.name.or(claims.preferred_username),
        ))
    }
}

impl std::fmt::Debug for JwksSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwksSessionValidator")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("jwks_url", &self.jwks_url)
            .finish_non_exhaustive()
    }
}
