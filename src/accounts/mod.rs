//! Account tokens.
//!
//! # Data Flow
//! ```text
//! token file / static list
//!     → source.rs (one token per non-empty trimmed line)
//!     → token.rs (Token, Bearer Credential, previews)
//!     → claims.rs (best-effort payload decode for log display)
//! ```
//!
//! # Design Decisions
//! - Tokens are loaded once and never refreshed
//! - Undecodable claims degrade to "unknown", never to an error

pub mod claims;
pub mod source;
pub mod token;

pub use claims::{ClaimsDisplay, TokenClaims};
pub use source::{FileTokenSource, StaticTokenSource, TokenSource, TokenSourceError};
pub use token::{preview, Credential, Token};
