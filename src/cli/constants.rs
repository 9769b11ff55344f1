//! Program identity constants and the verbosity-gated display machinery.
//!
//! Diagnostics go to stderr only; the generated source file is never touched
//! by any of this. The display level is a process-wide atomic so the CLI
//! layer, the conversion loop, and the I/O helpers can share one setting:
//!
//! 0 = silent; 1 = errors only; 2 = normal progress (default); 3 = verbose;
//! 4 = debug detail.

use std::sync::atomic::{AtomicU32, Ordering};

// ── String / identity constants ───────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "bin2c";

// ── Display level global ──────────────────────────────────────────────────────
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
