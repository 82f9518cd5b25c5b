//! # polman - Policy Manager
//!
//! A generic, framework-agnostic Rust library for resolving managed policy
//! values: typed getters with default fallback over a pluggable policy
//! store, plus precedence resolution for the coordination endpoint URL.
//!
//! ## Features
//!
//! - **Typed Getters**: Read string, u64, boolean and string-array policy
//!   values; an absent key yields the caller-supplied default, any other
//!   store failure propagates
//! - **Domain Decoding**: Interpret raw policy strings as tri-state
//!   [`PreferenceOption`]s, show/hide [`Visibility`] flags and durations
//! - **Pluggable Stores**: Implement [`PolicyStore`] over any backend
//!   (registry, plist, JSON file, environment); [`MemoryStore`] ships in
//!   the crate
//! - **Control URL Precedence**: Reconcile a managed endpoint URL with a
//!   locally persisted one, honoring historical installer defaults
//! - **UI-Safe Defaults**: Visibility and duration reads never fail on
//!   malformed values, so a bad policy entry cannot block the UI
//!
//! ## Quick Start
//!
//! ```rust
//! use polman::{MemoryStore, PolicyKey, PolicyReader, PreferenceOption};
//!
//! const UPDATE_CHECK: PolicyKey = PolicyKey::from_static("UpdateCheck");
//!
//! let store = MemoryStore::new().with("UpdateCheck", "always");
//! let reader = PolicyReader::new(store);
//!
//! let opt = reader.get_preference_option(&UPDATE_CHECK)?;
//! assert_eq!(opt, PreferenceOption::Always);
//! assert!(opt.should_enable(false)); // policy overrides the user's choice
//! # Ok::<(), polman::Error>(())
//! ```
//!
//! ## Default Fallback Behavior
//!
//! Exactly one store condition triggers default substitution: the
//! distinguished "no such key" signal. A caller that ignores returned errors
//! still gets a sane default from every getter, but for the primitive
//! getters a malformed stored value is paired with an error the caller
//! should observe before trusting the value.
//!
//! ```rust
//! use polman::{MemoryStore, PolicyKey, PolicyReader};
//!
//! let reader = PolicyReader::new(MemoryStore::new());
//!
//! // Nothing stored: the default comes back with no error.
//! let limit = reader.get_u64(&PolicyKey::from_static("LogLimit"), 1024)?;
//! assert_eq!(limit, 1024);
//! # Ok::<(), polman::Error>(())
//! ```
//!
//! ## Control URL Selection
//!
//! ```rust
//! use polman::{select_control_url, DEFAULT_CONTROL_URL, LEGACY_CONTROL_URL};
//!
//! // An administrator's explicit managed value always wins.
//! assert_eq!(
//!     select_control_url("https://hq.example.com", "https://old.example.com"),
//!     "https://hq.example.com"
//! );
//!
//! // A stale managed default loses to a genuine local customization.
//! assert_eq!(
//!     select_control_url(LEGACY_CONTROL_URL, "https://hq.example.com"),
//!     "https://hq.example.com"
//! );
//!
//! // With nothing anywhere, the current default.
//! assert_eq!(select_control_url("", ""), DEFAULT_CONTROL_URL);
//! ```

// Core modules
mod control_url;
mod duration;
mod error;
mod logging;
mod reader;
mod sync;
mod types;

pub mod store;

// Re-exports from core
pub use control_url::{DEFAULT_CONTROL_URL, LEGACY_CONTROL_URL, select_control_url};
pub use duration::parse_duration;
pub use error::{Error, Result};
pub use logging::{debug_logging_enabled, set_debug_logging_enabled};
pub use reader::PolicyReader;
pub use store::{MemoryStore, PolicyStore};
pub use types::{PolicyKey, PreferenceOption, Visibility};
