//! Core value types for policy settings
//!
//! A [`PolicyKey`] names a managed setting; [`PreferenceOption`] and
//! [`Visibility`] are the domain interpretations of raw policy strings.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// =============================================================================
// PolicyKey
// =============================================================================

/// Opaque identifier naming a policy setting (e.g., `"ControlURL"`)
///
/// Keys are only used to address reads against a [`PolicyStore`]; the store
/// decides how a key maps onto its backing storage (registry path, plist
/// entry, JSON field).
///
/// [`PolicyStore`]: crate::store::PolicyStore
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolicyKey(Cow<'static, str>);

impl PolicyKey {
    /// Create a key from a static name, usable in `const` contexts
    ///
    /// # Example
    /// ```rust
    /// use polman::PolicyKey;
    ///
    /// const CONTROL_URL: PolicyKey = PolicyKey::from_static("ControlURL");
    /// assert_eq!(CONTROL_URL.as_str(), "ControlURL");
    /// ```
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create a key from any string-like name
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The key name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for PolicyKey {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for PolicyKey {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl AsRef<str> for PolicyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PreferenceOption
// =============================================================================

/// Tri-state policy over an end-user choice
///
/// An enterprise policy management system can leave a selection to the user
/// or lock it in either direction. `Always` and `Never` remove the user's
/// ability to choose; `ShowChoice` (the default) keeps the choice visible.
///
/// Text encodings are `"user-decides"` (empty string is accepted as an
/// alias), `"always"` and `"never"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferenceOption {
    /// The user keeps the choice; policy does not force a value
    #[default]
    #[serde(rename = "user-decides")]
    ShowChoice,
    /// Policy forces the choice on
    #[serde(rename = "always")]
    Always,
    /// Policy forces the choice off
    #[serde(rename = "never")]
    Never,
}

impl PreferenceOption {
    /// Resolve the effective value of a boolean choice under this policy
    ///
    /// Returns the forced value when the policy locks the choice, otherwise
    /// the user's own selection.
    #[must_use]
    pub fn should_enable(self, user_choice: bool) -> bool {
        match self {
            PreferenceOption::ShowChoice => user_choice,
            PreferenceOption::Always => true,
            PreferenceOption::Never => false,
        }
    }

    /// Whether the user is still allowed to make the selection
    #[must_use]
    pub fn is_user_decides(self) -> bool {
        self == PreferenceOption::ShowChoice
    }
}

impl FromStr for PreferenceOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "user-decides" => Ok(PreferenceOption::ShowChoice),
            "always" => Ok(PreferenceOption::Always),
            "never" => Ok(PreferenceOption::Never),
            other => Err(Error::UnrecognizedPreferenceOption(other.to_string())),
        }
    }
}

impl fmt::Display for PreferenceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PreferenceOption::ShowChoice => "user-decides",
            PreferenceOption::Always => "always",
            PreferenceOption::Never => "never",
        })
    }
}

// =============================================================================
// Visibility
// =============================================================================

/// Show/hide decision for a UI element, policy-controlled
///
/// Text encodings are `"show"` and `"hide"`. `Visible` is the safe default
/// when the policy value is absent or unrecognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// The element is shown (default)
    #[default]
    #[serde(rename = "show")]
    Visible,
    /// Policy hides the element
    #[serde(rename = "hide")]
    Hidden,
}

impl Visibility {
    /// Whether the element should be shown
    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show" => Ok(Visibility::Visible),
            "hide" => Ok(Visibility::Hidden),
            other => Err(Error::UnrecognizedVisibility(other.to_string())),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Visibility::Visible => "show",
            Visibility::Hidden => "hide",
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_key_from_static_is_const() {
        const KEY: PolicyKey = PolicyKey::from_static("AdminConsole");
        assert_eq!(KEY.as_str(), "AdminConsole");
        assert_eq!(KEY.to_string(), "AdminConsole");
    }

    #[test]
    fn test_key_from_owned() {
        let key = PolicyKey::from(format!("Exit{}", "Node"));
        assert_eq!(key.as_str(), "ExitNode");
    }

    #[test]
    fn test_preference_option_decode() {
        assert_eq!(
            "always".parse::<PreferenceOption>().unwrap(),
            PreferenceOption::Always
        );
        assert_eq!(
            "never".parse::<PreferenceOption>().unwrap(),
            PreferenceOption::Never
        );
        assert_eq!(
            "user-decides".parse::<PreferenceOption>().unwrap(),
            PreferenceOption::ShowChoice
        );
        // Empty text is an alias for the default
        assert_eq!(
            "".parse::<PreferenceOption>().unwrap(),
            PreferenceOption::ShowChoice
        );
    }

    #[test]
    fn test_preference_option_decode_unrecognized() {
        let err = "sometimes".parse::<PreferenceOption>().unwrap_err();
        assert!(matches!(err, Error::UnrecognizedPreferenceOption(s) if s == "sometimes"));
    }

    #[test]
    fn test_preference_option_should_enable() {
        assert!(PreferenceOption::Always.should_enable(false));
        assert!(!PreferenceOption::Never.should_enable(true));
        assert!(PreferenceOption::ShowChoice.should_enable(true));
        assert!(!PreferenceOption::ShowChoice.should_enable(false));
    }

    #[test]
    fn test_visibility_decode() {
        assert_eq!("show".parse::<Visibility>().unwrap(), Visibility::Visible);
        assert_eq!("hide".parse::<Visibility>().unwrap(), Visibility::Hidden);
        assert!("invisible".parse::<Visibility>().is_err());
    }

    #[test]
    fn test_defaults_are_the_safe_sentinels() {
        assert_eq!(PreferenceOption::default(), PreferenceOption::ShowChoice);
        assert_eq!(Visibility::default(), Visibility::Visible);
        assert!(Visibility::default().is_visible());
    }

    #[test]
    fn test_serde_encodings() {
        assert_eq!(
            serde_json::to_string(&PreferenceOption::ShowChoice).unwrap(),
            "\"user-decides\""
        );
        assert_eq!(
            serde_json::from_str::<Visibility>("\"hide\"").unwrap(),
            Visibility::Hidden
        );
    }
}
