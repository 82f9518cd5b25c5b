//! Typed policy getters over an untyped store
//!
//! [`PolicyReader`] turns the four primitive reads of a [`PolicyStore`] into
//! typed, default-aware getters. The uniform rule: an absent key
//! ([`Error::NoSuchKey`]) substitutes the caller-supplied default with no
//! error, every other store failure propagates. A few getters deliberately
//! soften that for malformed *values* where a bad policy entry must never
//! block UI-facing callers.

use std::sync::atomic::{AtomicBool, Ordering};

use time::Duration;

use crate::duration::parse_duration;
use crate::error::Result;
use crate::logging::policy_debug;
use crate::store::PolicyStore;
use crate::types::{PolicyKey, PreferenceOption, Visibility};

/// Reads typed policy values from a [`PolicyStore`]
///
/// Every getter re-reads the store; there is no caching or change
/// notification. The reader holds no mutable state besides a diagnostic
/// flag, so it is safe to share across threads as long as the store is.
///
/// # Example
/// ```rust
/// use polman::{MemoryStore, PolicyKey, PolicyReader};
///
/// let store = MemoryStore::new().with("AdminConsole", "hide");
/// let reader = PolicyReader::new(store);
///
/// let vis = reader.get_visibility(&PolicyKey::from_static("AdminConsole"))?;
/// assert!(!vis.is_visible());
/// # Ok::<(), polman::Error>(())
/// ```
pub struct PolicyReader<S: PolicyStore> {
    store: S,
    store_in_use: AtomicBool,
}

impl<S: PolicyStore> PolicyReader<S> {
    /// Create a reader over the given store
    pub fn new(store: S) -> Self {
        Self {
            store,
            store_in_use: AtomicBool::new(false),
        }
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether any getter has exercised the store yet
    ///
    /// Diagnostic bookkeeping for the embedding application (e.g., to report
    /// that managed policies are actually being consulted). Not part of any
    /// getter's return contract.
    pub fn store_in_use(&self) -> bool {
        self.store_in_use.load(Ordering::Relaxed)
    }

    fn mark_store_in_use(&self) {
        self.store_in_use.store(true, Ordering::Relaxed);
    }

    /// Read a string policy value
    ///
    /// Returns `default` when the key is absent.
    ///
    /// # Errors
    ///
    /// Propagates any store failure other than the absent-key signal.
    pub fn get_string(&self, key: &PolicyKey, default: &str) -> Result<String> {
        self.mark_store_in_use();
        match self.store.read_string(key.as_str()) {
            Err(e) if e.is_no_such_key() => Ok(default.to_string()),
            other => other,
        }
    }

    /// Read an unsigned integer policy value
    ///
    /// Returns `default` when the key is absent.
    ///
    /// # Errors
    ///
    /// Propagates any store failure other than the absent-key signal,
    /// including a stored value that does not parse as an unsigned integer.
    pub fn get_u64(&self, key: &PolicyKey, default: u64) -> Result<u64> {
        self.mark_store_in_use();
        match self.store.read_u64(key.as_str()) {
            Err(e) if e.is_no_such_key() => Ok(default),
            other => other,
        }
    }

    /// Read a boolean policy value
    ///
    /// Returns `default` when the key is absent.
    ///
    /// # Errors
    ///
    /// Propagates any store failure other than the absent-key signal.
    pub fn get_boolean(&self, key: &PolicyKey, default: bool) -> Result<bool> {
        self.mark_store_in_use();
        match self.store.read_boolean(key.as_str()) {
            Err(e) if e.is_no_such_key() => Ok(default),
            other => other,
        }
    }

    /// Read a string-array policy value
    ///
    /// Returns `default` when the key is absent.
    ///
    /// # Errors
    ///
    /// Propagates any store failure other than the absent-key signal.
    pub fn get_string_array(&self, key: &PolicyKey, default: Vec<String>) -> Result<Vec<String>> {
        self.mark_store_in_use();
        match self.store.read_string_array(key.as_str()) {
            Err(e) if e.is_no_such_key() => Ok(default),
            other => other,
        }
    }

    /// Read a policy that locks or releases an end-user choice
    ///
    /// An absent key decodes to [`PreferenceOption::ShowChoice`], i.e. the
    /// user keeps the selection.
    ///
    /// # Errors
    ///
    /// Propagates store failures, and also returns the decode error for
    /// unrecognized stored text. Unlike [`get_visibility`], malformed values
    /// are NOT silently replaced: a policy that locks user choice must not
    /// degrade without the caller noticing. Callers that want the lenient
    /// behavior can fall back to `PreferenceOption::default()` themselves.
    ///
    /// [`get_visibility`]: PolicyReader::get_visibility
    pub fn get_preference_option(&self, key: &PolicyKey) -> Result<PreferenceOption> {
        self.get_string(key, "user-decides")?.parse()
    }

    /// Read a show/hide policy for a UI element
    ///
    /// An absent key decodes to [`Visibility::Visible`]. Unrecognized stored
    /// text also degrades to `Visible` with no error; a bad visibility value
    /// must never block the UI.
    ///
    /// # Errors
    ///
    /// Propagates store failures only; decode failures are swallowed.
    pub fn get_visibility(&self, key: &PolicyKey) -> Result<Visibility> {
        let raw = self.get_string(key, "show")?;
        match raw.parse::<Visibility>() {
            Ok(visibility) => Ok(visibility),
            Err(err) => {
                policy_debug!("{key}: {err}, treating as visible");
                Ok(Visibility::Visible)
            }
        }
    }

    /// Read a duration policy value (e.g., `"30s"`, `"1h30m"`)
    ///
    /// Returns `default` when the key is absent, the stored string is empty,
    /// or the stored string does not parse as a non-negative duration.
    ///
    /// # Errors
    ///
    /// Propagates store failures only; parse failures and negative spans are
    /// swallowed in favor of the default.
    pub fn get_duration(&self, key: &PolicyKey, default: Duration) -> Result<Duration> {
        // Empty reads the same as absent, whether stored or defaulted in.
        let raw = self.get_string(key, "")?;
        if raw.is_empty() {
            return Ok(default);
        }
        match parse_duration(&raw) {
            Ok(value) if !value.is_negative() => Ok(value),
            Ok(_) => {
                policy_debug!("{key}: negative duration '{raw}', using default");
                Ok(default)
            }
            Err(err) => {
                policy_debug!("{key}: {err}, using default");
                Ok(default)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
