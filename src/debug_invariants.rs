//! Structural invariant checks for the container types.
//!
//! Checks are cheap and run after every mutating container call in debug
//! builds (or with the `check-invariants` / `strict-invariants` features).

use crate::fill_error::FillError;

/// Types that can verify their own bookkeeping.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation found.
    fn validate_invariants(&self) -> Result<(), FillError>;

    /// Panic on a violation when invariant checking is enabled; no-op otherwise.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "debug_assert_invariants");
    }
}

/// Run a fallible check and panic with `ctx` on error when invariant checking
/// is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
