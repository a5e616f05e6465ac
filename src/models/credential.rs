//! Session credential attached to every portal request.

use std::fmt;

use crate::config::ConfigError;

/// Opaque session cookie supplied by the operator.
///
/// Sent verbatim as the `Cookie` header. The value never appears in
/// `Debug` output so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a cookie string, rejecting empty values.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Value for the `Cookie` request header.
    pub fn header_value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_cookie() {
        assert!(matches!(
            Credential::new("   "),
            Err(ConfigError::MissingCredential)
        ));
        assert!(matches!(
            Credential::new(""),
            Err(ConfigError::MissingCredential)
        ));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let credential = Credential::new("  .AspNetCore.Cookies=abc; lang=cs\n").unwrap();
        assert_eq!(
            credential.header_value(),
            ".AspNetCore.Cookies=abc; lang=cs"
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let credential = Credential::new("session=secret").unwrap();
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("secret"));
    }
}
