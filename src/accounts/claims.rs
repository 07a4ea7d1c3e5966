//! Best-effort claim decoding for display.
//!
//! Tokens are JWT-shaped (`header.payload.signature`). Only the payload is
//! read and the signature is never checked; the result is used to label log
//! lines, nothing else. Anything that does not decode yields `None`, and the
//! caller shows `"unknown"` placeholders instead.

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Placeholder shown for any claim that could not be read.
pub const UNKNOWN: &str = "unknown";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
const USER_ID_KEYS: [&str; 5] = ["sub", "userId", "user_id", "uid", "id"];

/// Claims extracted from a token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: Option<String>,
    pub issued_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenClaims {
    /// Decode the payload segment of `token`.
    pub fn decode(token: &str) -> Option<Self> {
        let mut segments = token.split('.');
        let _header = segments.next()?;
        let payload = segments.next()?;

        let bytes = base64url_decode(payload)?;
        let value: Value = serde_json::from_slice(&bytes).ok()?;
        let claims = value.as_object()?;

        Some(Self {
            user_id: user_id(claims),
            issued_at: timestamp(claims.get("iat")),
            expires_at: timestamp(claims.get("exp")),
        })
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

/// Display-ready view of a token's claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimsDisplay {
    pub user_id: String,
    pub issued_at: String,
    pub expires_at: String,
}

impl ClaimsDisplay {
    pub fn unknown() -> Self {
        Self {
            user_id: UNKNOWN.to_string(),
            issued_at: UNKNOWN.to_string(),
            expires_at: UNKNOWN.to_string(),
        }
    }
}

impl From<Option<&TokenClaims>> for ClaimsDisplay {
    fn from(claims: Option<&TokenClaims>) -> Self {
        let Some(claims) = claims else {
            return Self::unknown();
        };
        Self {
            user_id: claims.user_id.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            issued_at: format_time(claims.issued_at),
            expires_at: format_time(claims.expires_at),
        }
    }
}

fn base64url_decode(input: &str) -> Option<Vec<u8>> {
    let input = input.trim_end_matches('=');
    if let Ok(bytes) = URL_SAFE_NO_PAD.decode(input.as_bytes()) {
        return Some(bytes);
    }
    STANDARD_NO_PAD.decode(input.as_bytes()).ok()
}

fn user_id(claims: &Map<String, Value>) -> Option<String> {
    USER_ID_KEYS.iter().find_map(|key| match claims.get(*key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let secs = match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?,
        _ => return None,
    };
    DateTime::from_timestamp(secs, 0)
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build an unsigned JWT-shaped token around `payload`.
    pub(crate) fn token_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload.as_bytes())
        )
    }

    #[test]
    fn test_decode_standard_claims() {
        let token = token_with_payload(r#"{"sub":"user-42","iat":1700000000,"exp":1700086400}"#);
        let claims = TokenClaims::decode(&token).unwrap();

        assert_eq!(claims.user_id.as_deref(), Some("user-42"));
        let display = ClaimsDisplay::from(Some(&claims));
        assert_eq!(display.issued_at, "2023-11-14 22:13:20 UTC");
        assert_eq!(display.expires_at, "2023-11-15 22:13:20 UTC");
    }

    #[test]
    fn test_numeric_user_id_alias() {
        let token = token_with_payload(r#"{"userId":1337,"iat":1700000000}"#);
        let claims = TokenClaims::decode(&token).unwrap();

        assert_eq!(claims.user_id.as_deref(), Some("1337"));
        assert!(claims.expires_at.is_none());
        assert_eq!(ClaimsDisplay::from(Some(&claims)).expires_at, UNKNOWN);
    }

    #[test]
    fn test_padded_standard_alphabet_payload() {
        use base64::engine::general_purpose::STANDARD;

        // "~~~" forces '+' and '/' into the encoding; the length forces padding.
        let payload = r#"{"sub":"~~~?>","iat":1700000000}"#;
        let encoded = STANDARD.encode(payload.as_bytes());
        assert!(encoded.ends_with('='));
        assert!(encoded.contains('+') || encoded.contains('/'));

        let claims = TokenClaims::decode(&format!("header.{}.sig", encoded)).unwrap();
        assert_eq!(claims.user_id.as_deref(), Some("~~~?>"));
    }

    #[test]
    fn test_undecodable_tokens() {
        assert!(TokenClaims::decode("not-a-token").is_none());
        assert!(TokenClaims::decode("a.%%%.c").is_none());
        assert!(TokenClaims::decode(&token_with_payload("[1,2,3]")).is_none());
        assert_eq!(ClaimsDisplay::from(None), ClaimsDisplay::unknown());
    }

    #[test]
    fn test_expiry_check() {
        let token = token_with_payload(r#"{"sub":"a","exp":1700000000}"#);
        let claims = TokenClaims::decode(&token).unwrap();
        let before = DateTime::from_timestamp(1_699_999_999, 0).unwrap();
        let after = DateTime::from_timestamp(1_700_000_001, 0).unwrap();

        assert!(!claims.is_expired_at(before));
        assert!(claims.is_expired_at(after));
    }
}
