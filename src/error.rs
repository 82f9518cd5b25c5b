//! Error types for the polman library

use thiserror::Error;

/// Result type alias for polman operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for polman library
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    /// The distinguished "absent" signal. Every typed getter intercepts this
    /// and substitutes the caller-supplied default; it never reaches callers
    /// of `PolicyReader`.
    #[error("Policy key not found: {0}")]
    NoSuchKey(String),

    #[error("Type mismatch for {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: String,
    },

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Store read failed for {key}: {reason}")]
    StoreRead { key: String, reason: String },

    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    #[error("Unrecognized preference option: '{0}'")]
    UnrecognizedPreferenceOption(String),

    #[error("Unrecognized visibility: '{0}'")]
    UnrecognizedVisibility(String),

    #[error("Invalid duration '{0}': {1}")]
    InvalidDuration(String, String),
}

impl Error {
    /// Check if this is the distinguished "no such key" error
    ///
    /// Typed getters use this to tell "absent" apart from "failed": only an
    /// absent key triggers default substitution, every other store error
    /// propagates to the caller.
    #[must_use]
    pub fn is_no_such_key(&self) -> bool {
        matches!(self, Error::NoSuchKey(_))
    }

    /// Check if this is a value-decode error (preference option, visibility
    /// or duration text that could not be interpreted)
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::UnrecognizedPreferenceOption(_)
                | Error::UnrecognizedVisibility(_)
                | Error::InvalidDuration(..)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_such_key_is_distinguished() {
        assert!(Error::NoSuchKey("AdminConsole".into()).is_no_such_key());
        assert!(
            !Error::TypeMismatch {
                key: "KeepAlive".into(),
                expected: "u64",
                actual: "string".into(),
            }
            .is_no_such_key()
        );
    }

    #[test]
    fn test_decode_errors_are_grouped() {
        assert!(Error::UnrecognizedVisibility("maybe".into()).is_decode_error());
        assert!(Error::InvalidDuration("5x".into(), "unknown unit".into()).is_decode_error());
        assert!(!Error::NoSuchKey("ControlURL".into()).is_decode_error());
    }
}
