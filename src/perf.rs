//! Performance instrumentation for event handlers and renders.
//!
//! Enable profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! annoboard = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn handle_pointer_move(&mut self, pos: Coordinate) {
//!     profile_scope!("handle_pointer_move");
//!     // ... event handling ...
//! }
//! ```
//!
//! Without the feature the macro expands to nothing but a use of its argument.

use std::time::Instant;
use tracing::{debug, warn};

// ============================================================================
// Constants
// ============================================================================

/// Budget for one pointer event including its redraw, at 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Threshold used by `profile_scope!` timers
pub const PROFILING_THRESHOLD_MS: f64 = 1.0;

// ============================================================================
// Profiling Macro (zero-cost when disabled)
// ============================================================================

/// Time the enclosing scope. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

// ============================================================================
// Scoped Timer
// ============================================================================

/// Logs how long a scope took when it is dropped.
///
/// Scopes over `threshold_ms` are reported at warn level, the rest at debug.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the one-frame budget as threshold.
    pub fn with_default_threshold(name: &'static str) -> Self {
        Self::new(name, TARGET_FRAME_MS)
    }

    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, PROFILING_THRESHOLD_MS)
    }

    /// Elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                "[PERF] {} took {:.2}ms (threshold {:.2}ms)",
                self.name, elapsed_ms, self.threshold_ms
            );
        } else {
            debug!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        }
    }
}

/// Run `f` and return its result with the elapsed milliseconds.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed().as_secs_f64() * 1000.0)
}
