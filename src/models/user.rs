//! Session token claims and login types

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Login request. The email becomes the token identity; no password
/// verification happens here, identity is asserted by the frontend after its
/// own sign-in flow.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
}

/// Login / logout acknowledgement
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
}

/// JWT claims for an authenticated borrower
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    /// Borrower email
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl UserClaims {
    /// Build claims for an email with the given validity window
    pub fn new(email: &str, ttl_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(ttl_hours)).timestamp(),
        }
    }

    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    /// Reject when a caller-supplied email disagrees with the token identity.
    /// The token stays the sole source of identity; this is a defense-in-depth
    /// check against clients acting on behalf of another account.
    pub fn require_self(&self, email: &str) -> Result<(), AppError> {
        if self.sub == email {
            Ok(())
        } else {
            Err(AppError::Authorization("Forbidden access".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    const SECRET: &str = "test-secret";

    #[test]
    fn token_round_trip() {
        let claims = UserClaims::new("a@x.com", 5);
        let token = claims.create_token(SECRET).unwrap();
        let decoded = UserClaims::from_token(&token, SECRET).unwrap();
        assert_eq!(decoded.email(), "a@x.com");
        assert_eq!(decoded.exp - decoded.iat, 5 * 3600);
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = UserClaims::new("a@x.com", 5).create_token(SECRET).unwrap();
        let err = UserClaims::from_token(&token, "other-secret").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn rejects_expired_token() {
        // Issued six hours ago with a five hour validity
        let now = Utc::now();
        let claims = UserClaims {
            sub: "a@x.com".to_string(),
            iat: (now - Duration::hours(6)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = claims.create_token(SECRET).unwrap();
        let err = UserClaims::from_token(&token, SECRET).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn require_self_matches_token_email() {
        let claims = UserClaims::new("a@x.com", 5);
        assert!(claims.require_self("a@x.com").is_ok());
        assert!(claims.require_self("b@x.com").is_err());
    }
}
