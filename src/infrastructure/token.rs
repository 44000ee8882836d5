//! Access token signing.
//!
//! Produces the HS256 JWTs LiveKit clients expect: the API key as issuer,
//! the participant identity as subject, and the capability flags under the
//! `video` claim.

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{AccessGrant, VideoGrants};

/// Token lifetime in seconds (6 hours, the LiveKit default).
const TOKEN_TTL_SECS: i64 = 6 * 3600;

/// Errors produced while signing a token.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token encoding failed: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),
}

/// JWT claims for an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Issuer (the API key)
    pub iss: String,
    /// Subject (the participant identity)
    pub sub: String,
    /// Display name
    pub name: String,
    /// Not-before (unix timestamp)
    pub nbf: i64,
    /// Expiry (unix timestamp)
    pub exp: i64,
    /// Capability grants
    pub video: VideoGrants,
}

/// Signs access grants into string tokens with an API key/secret pair.
pub struct TokenSigner {
    api_key: String,
    encoding_key: EncodingKey,
}

impl TokenSigner {
    pub fn new(api_key: impl Into<String>, api_secret: &str) -> Self {
        Self {
            api_key: api_key.into(),
            encoding_key: EncodingKey::from_secret(api_secret.as_bytes()),
        }
    }

    /// Sign a grant into a JWT.
    pub fn sign(&self, grant: &AccessGrant) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            iss: self.api_key.clone(),
            sub: grant.identity.as_str().to_string(),
            name: grant.name.clone(),
            nbf: now,
            exp: now + TOKEN_TTL_SECS,
            video: grant.video.clone(),
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }
}
