//! Bearer tokens and the credentials built from them.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION};

use crate::accounts::claims::TokenClaims;

/// Marker appended to every truncated preview.
pub const ELLIPSIS: &str = "...";

/// First `len` characters of `value` followed by [`ELLIPSIS`].
///
/// The marker is always appended, so the result never exceeds
/// `len + ELLIPSIS.len()` characters.
pub fn preview(value: &str, len: usize) -> String {
    let head: String = value.chars().take(len).collect();
    format!("{}{}", head, ELLIPSIS)
}

/// One account's opaque bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn preview(&self, len: usize) -> String {
        preview(&self.0, len)
    }

    pub fn claims(&self) -> Option<TokenClaims> {
        TokenClaims::decode(&self.0)
    }

    /// Render the token as an `Authorization: Bearer` credential.
    pub fn credential(&self) -> Result<Credential, InvalidHeaderValue> {
        Credential::bearer(&self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&self.preview(10)).finish()
    }
}

/// Validated, sensitive `Authorization` header value.
#[derive(Clone)]
pub struct Credential(HeaderValue);

impl Credential {
    pub fn bearer(token: &str) -> Result<Self, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        value.set_sensitive(true);
        Ok(Self(value))
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.0
    }

    /// Header map carrying only this credential.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.0.clone());
        headers
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(Bearer <redacted>)")
    }
}
