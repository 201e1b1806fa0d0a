//! Bearer token handling.

use std::fmt;

use super::error::{RunnError, RunnResult};

/// Opaque bearer token for the Runn API.
///
/// The token never appears in `Debug` output so it cannot leak through
/// tracing fields.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token. Returns `None` for blank input.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Resolve the credential for one call.
    ///
    /// An explicit per-call token wins over the process-wide default. Fails
    /// with [`RunnError::Authentication`] when neither is usable.
    pub fn resolve(explicit: Option<&str>, fallback: Option<&Credential>) -> RunnResult<Self> {
        explicit
            .and_then(Credential::new)
            .or_else(|| fallback.cloned())
            .ok_or_else(|| RunnError::Authentication {
                message: "RUNN_API_KEY not set and no api_key provided".to_string(),
            })
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
