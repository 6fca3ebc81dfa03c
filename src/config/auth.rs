//! Identity provider settings.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// `auth` section describing the OIDC provider that issues bearer tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Must equal the `iss` claim. The key set is found under it by default.
    pub issuer_url: String,

    /// Must appear in the `aud` claim.
    pub audience: String,

    /// Key set location for providers that do not serve
    /// `/.well-known/jwks.json` below the issuer.
    #[serde(default)]
    pub jwks_url: Option<String>,

    /// How long a fetched key set is trusted before refetching.
    #[serde(default = "default_jwks_cache_ttl_secs")]
    pub jwks_cache_ttl_secs: u64,
}

fn default_jwks_cache_ttl_secs() -> u64 {
    3600
}

impl AuthConfig {
    pub fn jwks_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.jwks_cache_ttl_secs)
    }

    pub fn resolved_jwks_url(&self) -> String {
        self.jwks_url.clone().unwrap_or_else(|| {
            format!(
                "{}/.well-known/jwks.json",
                self.issuer_url.trim_end_matches('/')
            )
        })
    }

    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.issuer_url.trim().is_empty() {
            return Err(ValidationError::Missing("auth.issuer_url"));
        }
        if self.audience.trim().is_empty() {
            return Err(ValidationError::Missing("auth.audience"));
        }
        if *environment == Environment::Production && !self.issuer_url.starts_with("https://") {
            return Err(ValidationError::InsecureIssuer);
        }
        Ok(())
    }
}
