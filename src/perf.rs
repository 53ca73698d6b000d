//! Timing instrumentation for pointer handlers and scoped writes.
//!
//! Pointer moves arrive at device rate during a drag, so the handlers are
//! wrapped in `profile_scope!`, which compiles to nothing unless the
//! `profiling` feature is enabled. Scoped writes always carry a
//! [`ScopedTimer`] with a generous threshold so that a stalled disk shows up
//! in the logs.
//!
//! ```ignore
//! use canvas_bridge::profile_scope;
//!
//! fn on_move() {
//!     profile_scope!("pointer_move");
//!     // ... handler body ...
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::warn;

/// Threshold used by `profile_scope!` without an explicit value
pub const PROFILING_THRESHOLD_MS: f64 = 1.0;

static TIMER_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
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

/// A timer that reports its duration on drop when it exceeds a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    timer_id: u64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            timer_id: TIMER_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Timer with the low profiling threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, PROFILING_THRESHOLD_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Unique, monotonically increasing id.
    pub fn id(&self) -> u64 {
        self.timer_id
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!(timer_id = self.timer_id, "[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

/// Measure execution time of a closure, returning the result and elapsed ms.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}
