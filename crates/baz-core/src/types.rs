//! Core types for optional-module resolution.

use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::error::{BazError, Result};

/// Fully-qualified name of an optional module (e.g. `com.example.bar.Bar`).
///
/// Names are dotted paths: one or more segments separated by `.`, each
/// starting with an ASCII letter or `_` and continuing with ASCII
/// alphanumerics or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleName(String);

impl ModuleName {
    /// Parses and validates a module name.
    ///
    /// # Errors
    /// Returns [`BazError::Config`] if the name is empty or a segment is not
    /// a valid identifier.
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_module_name(&name)?;
        Ok(Self(name))
    }

    /// Builds the name of a capability's module.
    ///
    /// Capability names are checked at compile time where they are declared,
    /// so this does not validate again.
    #[must_use]
    pub fn of<C: Capability + ?Sized>() -> Self {
        debug_assert!(Self::is_valid(C::NAME));
        Self(C::NAME.to_owned())
    }

    /// Returns true if `name` is a well-formed module name.
    #[must_use]
    pub const fn is_valid(name: &str) -> bool {
        let bytes = name.as_bytes();
        if bytes.is_empty() {
            return false;
        }
        let mut i = 0;
        let mut segment_start = true;
        while i < bytes.len() {
            let b = bytes[i];
            if b == b'.' {
                if segment_start {
                    return false;
                }
                segment_start = true;
            } else if segment_start {
                if !(b.is_ascii_alphabetic() || b == b'_') {
                    return false;
                }
                segment_start = false;
            } else if !(b.is_ascii_alphanumeric() || b == b'_') {
                return false;
            }
            i += 1;
        }
        !segment_start
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the last segment (`Bar` for `com.example.bar.Bar`).
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Returns everything before the last segment, if any.
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(package, _)| package)
    }
}

fn validate_module_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(BazError::config("module name cannot be empty"));
    }
    if !ModuleName::is_valid(name) {
        return Err(BazError::config(format!(
            "invalid module name {name:?}: expected dot-separated identifiers"
        )));
    }
    Ok(())
}

impl TryFrom<String> for ModuleName {
    type Error = BazError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl std::str::FromStr for ModuleName {
    type Err = BazError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<ModuleName> for String {
    fn from(name: ModuleName) -> Self {
        name.0
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fully_qualified_name() {
        let name = ModuleName::parse("com.example.bar.Bar").unwrap();
        assert_eq!(name.as_str(), "com.example.bar.Bar");
        assert_eq!(name.simple_name(), "Bar");
        assert_eq!(name.package(), Some("com.example.bar"));
        assert_eq!(name.to_string(), "com.example.bar.Bar");
    }

    #[test]
    fn test_single_segment_has_no_package() {
        let name = ModuleName::parse("Bar").unwrap();
        assert_eq!(name.simple_name(), "Bar");
        assert!(name.package().is_none());
    }

    #[test]
    fn test_rejects_malformed_names() {
        for bad in ["", ".", "com..Bar", "com.example.", ".Bar", "com.1bar", "com.ba-r", "com bar"] {
            let err = ModuleName::parse(bad).unwrap_err();
            assert!(matches!(err, BazError::Config(_)), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_underscores_allowed() {
        assert!(ModuleName::parse("_private.mod_2").is_ok());
    }

    #[test]
    fn test_is_valid_is_usable_in_const_context() {
        const VALID: bool = ModuleName::is_valid("com.example.bar.Bar");
        const INVALID: bool = ModuleName::is_valid("com.example.");
        assert!(VALID);
        assert!(!INVALID);
    }

    #[test]
    fn test_of_capability_uses_declared_name() {
        let name = ModuleName::of::<dyn crate::capability::Bar>();
        assert_eq!(name.as_str(), "com.example.bar.Bar");
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            module: ModuleName,
        }

        let ok: Wrapper = toml::from_str(r#"module = "com.example.bar.Bar""#).unwrap();
        assert_eq!(ok.module.simple_name(), "Bar");

        let bad: std::result::Result<Wrapper, _> = toml::from_str(r#"module = "com..Bar""#);
        assert!(bad.is_err());
    }
}
