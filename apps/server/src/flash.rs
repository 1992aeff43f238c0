//! # Flash Messages
//!
//! One-shot outcome messages carried across the POST → redirect → GET hop.
//!
//! ## Cookie Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /batches                                                          │
//! │       │  Flash::success("Batch recorded")                               │
//! │       ▼                                                                 │
//! │  303 See Other + Set-Cookie: flash=<HS256 token>                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET /batches                                                           │
//! │       │  verify(token) → show message                                   │
//! │       ▼                                                                 │
//! │  200 OK + Set-Cookie: flash=; Max-Age=0  (consumed)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tokens are signed with the configured secret key. A token that fails
//! verification (tampered, wrong key, expired) is treated as no message.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::ledger::LedgerError;

/// Name of the cookie holding the pending flash.
pub const FLASH_COOKIE: &str = "flash";

/// How long a flash survives if the redirect is never followed.
const FLASH_LIFETIME_SECS: i64 = 300;

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

/// A message describing the outcome of a write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Flash {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Flash {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    /// Turns a write result into the message shown after the redirect.
    pub fn from_outcome<T>(result: &Result<T, LedgerError>, success: &str) -> Self {
        match result {
            Ok(_) => Flash::success(success),
            Err(e) => Flash::error(e.to_string()),
        }
    }
}

/// Flash token claims.
#[derive(Debug, Serialize, Deserialize)]
struct FlashClaims {
    level: FlashLevel,
    msg: String,
    exp: i64,
}

/// Signs and verifies flash cookies.
pub struct FlashSigner {
    secret: String,
}

impl FlashSigner {
    pub fn new(secret: impl Into<String>) -> Self {
        FlashSigner {
            secret: secret.into(),
        }
    }

    /// Encodes a flash as a signed token.
    pub fn sign(&self, flash: &Flash) -> Result<String, ApiError> {
        let claims = FlashClaims {
            level: flash.level,
            msg: flash.message.clone(),
            exp: (Utc::now() + Duration::seconds(FLASH_LIFETIME_SECS)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ApiError::Internal(format!("Failed to sign flash: {e}")))
    }

    /// Decodes a token, or `None` if it does not verify.
    pub fn verify(&self, token: &str) -> Option<Flash> {
        match decode::<FlashClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        ) {
            Ok(data) => Some(Flash {
                level: data.claims.level,
                message: data.claims.msg,
            }),
            Err(e) => {
                debug!(error = %e, "Ignoring invalid flash cookie");
                None
            }
        }
    }

    /// `Set-Cookie` value carrying `flash`.
    pub fn set_cookie(&self, flash: &Flash) -> Result<String, ApiError> {
        let token = self.sign(flash)?;
        Ok(format!(
            "{FLASH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={FLASH_LIFETIME_SECS}"
        ))
    }

    /// Reads and verifies the pending flash from request headers.
    pub fn take(&self, headers: &HeaderMap) -> Option<Flash> {
        cookie_value(headers, FLASH_COOKIE).and_then(|token| self.verify(token))
    }
}

/// `Set-Cookie` value that removes the flash cookie.
pub fn clear_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Finds a cookie by name across all `Cookie` headers.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_sign_then_take() {
        let signer = FlashSigner::new("secret");
        let flash = Flash::success("Batch recorded");
        let token = signer.sign(&flash).unwrap();

        let headers = headers_with_cookie(&format!("theme=dark; flash={token}"));
        assert_eq!(signer.take(&headers), Some(flash));
    }

    #[test]
    fn test_wrong_secret_is_ignored() {
        let token = FlashSigner::new("secret").sign(&Flash::error("x")).unwrap();

        assert_eq!(FlashSigner::new("other").verify(&token), None);
        assert_eq!(FlashSigner::new("secret").verify("garbage"), None);
    }

    #[test]
    fn test_missing_or_empty_cookie() {
        let signer = FlashSigner::new("secret");
        assert_eq!(signer.take(&HeaderMap::new()), None);
        assert_eq!(signer.take(&headers_with_cookie("flash=")), None);
    }

    #[test]
    fn test_from_outcome() {
        let ok: Result<(), LedgerError> = Ok(());
        assert_eq!(
            Flash::from_outcome(&ok, "Sale recorded"),
            Flash::success("Sale recorded")
        );

        let err: Result<(), LedgerError> = Err(LedgerError::Validation(
            oilmill_core::ValidationError::Required { field: "name" },
        ));
        assert_eq!(
            Flash::from_outcome(&err, "Product added"),
            Flash::error("Invalid input: name is required")
        );
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = FlashSigner::new("secret").set_cookie(&Flash::success("ok")).unwrap();
        assert!(cookie.starts_with("flash="));
        assert!(cookie.contains("HttpOnly"));
        assert!(clear_cookie().ends_with("Max-Age=0"));
    }
}
