//! Control URL precedence resolution
//!
//! The coordination endpoint can arrive from two places: the managed policy
//! source (set by an administrator) and the locally persisted client state.
//! Older installers also wrote a now-obsolete default into the managed
//! source, so "managed value present" does not always mean "administrator
//! chose it". [`select_control_url`] reconciles the two.

/// The current default coordination endpoint
pub const DEFAULT_CONTROL_URL: &str = "https://controlplane.polman.dev";

/// Historical default once written into the managed source by old installers
///
/// A managed value equal to this is treated as stale rather than as an
/// administrator's explicit choice.
pub const LEGACY_CONTROL_URL: &str = "https://login.polman.dev";

/// Select the control URL from the managed policy value and the locally
/// persisted one
///
/// Pure and total: never fails, never returns an empty string. Precedence,
/// in order:
///
/// 1. A managed value other than the legacy default is an explicit
///    administrator choice and always wins.
/// 2. A managed legacy default still beats an empty local value.
/// 3. A managed legacy default loses to a local value that is neither known
///    default (a genuine customization the user cares about).
/// 4. Otherwise any non-empty local value wins.
/// 5. With nothing else, the current default.
///
/// # Example
/// ```rust
/// use polman::{select_control_url, DEFAULT_CONTROL_URL, LEGACY_CONTROL_URL};
///
/// assert_eq!(select_control_url("", ""), DEFAULT_CONTROL_URL);
/// assert_eq!(
///     select_control_url(LEGACY_CONTROL_URL, "https://hq.example.com"),
///     "https://hq.example.com"
/// );
/// ```
#[must_use]
pub fn select_control_url(managed: &str, local: &str) -> String {
    if !managed.is_empty() {
        if managed != LEGACY_CONTROL_URL {
            // Something explicit the installer didn't write itself.
            return managed.to_string();
        }
        if local.is_empty() {
            // A stale managed default still beats nothing on disk.
            return managed.to_string();
        }
        if local != DEFAULT_CONTROL_URL && local != LEGACY_CONTROL_URL {
            // The managed source holds the old installer default while the
            // local state holds a custom endpoint. Prefer the custom one.
            return local.to_string();
        }
    }
    if !local.is_empty() {
        return local.to_string();
    }
    DEFAULT_CONTROL_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_empty_yields_current_default() {
        assert_eq!(select_control_url("", ""), DEFAULT_CONTROL_URL);
    }

    #[test]
    fn test_explicit_managed_value_wins() {
        assert_eq!(
            select_control_url("https://custom.example", ""),
            "https://custom.example"
        );
        // Even over a custom local value
        assert_eq!(
            select_control_url("https://custom.example", "https://other.example"),
            "https://custom.example"
        );
    }

    #[test]
    fn test_managed_legacy_beats_empty_local() {
        assert_eq!(select_control_url(LEGACY_CONTROL_URL, ""), LEGACY_CONTROL_URL);
    }

    #[test]
    fn test_custom_local_beats_stale_managed_default() {
        assert_eq!(
            select_control_url(LEGACY_CONTROL_URL, "https://mycompany.example"),
            "https://mycompany.example"
        );
    }

    #[test]
    fn test_local_known_default_falls_through() {
        // Local equals a known default, so it is not a customization; the
        // local-non-empty branch then returns it anyway.
        assert_eq!(
            select_control_url(LEGACY_CONTROL_URL, DEFAULT_CONTROL_URL),
            DEFAULT_CONTROL_URL
        );
        assert_eq!(
            select_control_url(LEGACY_CONTROL_URL, LEGACY_CONTROL_URL),
            LEGACY_CONTROL_URL
        );
    }

    #[test]
    fn test_local_wins_when_managed_empty() {
        assert_eq!(
            select_control_url("", "https://hq.example.com"),
            "https://hq.example.com"
        );
        assert_eq!(select_control_url("", DEFAULT_CONTROL_URL), DEFAULT_CONTROL_URL);
    }

    #[test]
    fn test_never_returns_empty() {
        let candidates = [
            "",
            DEFAULT_CONTROL_URL,
            LEGACY_CONTROL_URL,
            "https://custom.example",
        ];
        for managed in candidates {
            for local in candidates {
                assert!(
                    !select_control_url(managed, local).is_empty(),
                    "empty result for ({managed:?}, {local:?})"
                );
            }
        }
    }
}
