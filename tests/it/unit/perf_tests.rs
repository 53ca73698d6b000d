//! Unit tests for perf module.

use canvas_bridge::perf::{ScopedTimer, measure};

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping it must not warn
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_timer_ids_increase() {
    let first = ScopedTimer::for_profiling("a");
    let second = ScopedTimer::for_profiling("b");
    assert!(second.id() > first.id());
}

#[test]
fn test_measure_returns_result() {
    let (value, elapsed) = measure(|| 21 * 2);
    assert_eq!(value, 42);
    assert!(elapsed >= 0.0);
}

#[test]
fn test_profile_scope_compiles_in_any_build() {
    fn handler() -> u32 {
        canvas_bridge::profile_scope!("handler");
        canvas_bridge::profile_scope!("handler_with_threshold", 5.0);
        7
    }
    assert_eq!(handler(), 7);
}
