//! Process-wide debug logging toggle
//!
//! Policy reads can be spammy (UI code polls visibility flags); debug
//! records are therefore opt-in on top of the `log` facade's own filtering.
//! The flag is last-writer-wins and takes effect for subsequent log calls.

use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_LOGGING: AtomicBool = AtomicBool::new(false);

/// Enable or disable debug logging of policy reads
pub fn set_debug_logging_enabled(enabled: bool) {
    DEBUG_LOGGING.store(enabled, Ordering::Relaxed);
}

/// Whether debug logging of policy reads is currently enabled
#[must_use]
pub fn debug_logging_enabled() -> bool {
    DEBUG_LOGGING.load(Ordering::Relaxed)
}

/// Emit a debug record if the toggle is on
macro_rules! policy_debug {
    ($($arg:tt)*) => {
        if $crate::logging::debug_logging_enabled() {
            ::log::debug!($($arg)*);
        }
    };
}

pub(crate) use policy_debug;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_roundtrip() {
        set_debug_logging_enabled(true);
        assert!(debug_logging_enabled());
        set_debug_logging_enabled(false);
        assert!(!debug_logging_enabled());
    }
}
