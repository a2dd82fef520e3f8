//! Unit tests for perf module.

use annoboard::perf::{ScopedTimer, TARGET_FRAME_MS, measure};

#[test]
fn test_scoped_timer_creation() {
    // High threshold, nothing should warn on drop
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_default_threshold_is_one_frame() {
    let timer = ScopedTimer::with_default_threshold("frame");
    assert_eq!(timer.threshold_ms(), TARGET_FRAME_MS);
}

#[test]
fn test_measure_returns_value() {
    let (value, ms) = measure(|| (1..=10).sum::<u32>());
    assert_eq!(value, 55);
    assert!(ms >= 0.0);
}

#[test]
fn test_profile_scope_compiles_in_any_build() {
    annoboard::profile_scope!("scoped");
    annoboard::profile_scope!("scoped_with_threshold", 5.0);
}
