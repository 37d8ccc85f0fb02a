//! Domain identifier types with proper encapsulation.

use std::fmt;

/// Vault record identifier - newtype for type safety.
///
/// Identifiers are assigned by Vault and never recomputed locally. The inner
/// String is private to ensure all construction goes through the defined
/// constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Create a new RecordId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the record ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Opaque Vault session token.
///
/// `Display` and `Debug` only reveal a short prefix so the token can be
/// logged without leaking the full credential.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Create a new session token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for use in the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// A short prefix suitable for logs.
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(6).collect();
        format!("{prefix}…")
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&self.redacted()).finish()
    }
}

/// Next-page cursor returned by the Vault query API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageToken(String);

impl PageToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_round_trips_through_display() {
        let id = RecordId::from("V6A000000001001");
        assert_eq!(id.as_str(), "V6A000000001001");
        assert_eq!(id.to_string(), "V6A000000001001");
    }

    #[test]
    fn session_token_is_redacted_in_output() {
        let token = SessionToken::new("0123456789ABCDEFGHIJ");

        assert_eq!(token.expose(), "0123456789ABCDEFGHIJ");
        assert_eq!(token.to_string(), "012345…");
        assert!(!format!("{token:?}").contains("ABCDEF"));
    }

    #[test]
    fn short_session_token_redacts_without_panicking() {
        let token = SessionToken::new("ab");
        assert_eq!(token.redacted(), "ab…");
    }
}
