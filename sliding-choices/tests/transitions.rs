use std::time::Duration;

use sliding_choices::{ChoicesConfig, Easing, TransitionConfig};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_out_expo() {
    assert_eq!(Easing::EaseOutExpo.apply(0.0), 0.0);
    assert_eq!(Easing::EaseOutExpo.apply(1.0), 1.0);
    // Half the distance is covered within the first tenth
    assert!((Easing::EaseOutExpo.apply(0.1) - 0.5).abs() < 0.0001);
}

#[test]
fn test_easing_clamps_input() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseOutExpo,
    ] {
        assert_eq!(easing.apply(-0.5), 0.0, "{:?} below 0", easing);
        assert_eq!(easing.apply(1.5), 1.0, "{:?} above 1", easing);
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseOutExpo,
    ] {
        let mut prev = 0.0;
        for i in 1..=20 {
            let t = i as f32 / 20.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

// =============================================================================
// TransitionConfig Tests
// =============================================================================

#[test]
fn test_transition_default_matches_indicator_slide() {
    let config = TransitionConfig::default();
    assert_eq!(config.duration, Duration::from_millis(1500));
    assert_eq!(config.easing, Easing::EaseOutExpo);
}

#[test]
fn test_transition_progress() {
    let config = TransitionConfig::new(Duration::from_millis(200), Easing::Linear);
    assert_eq!(config.progress(Duration::ZERO), 0.0);
    assert!((config.progress(Duration::from_millis(50)) - 0.25).abs() < 0.0001);
    assert_eq!(config.progress(Duration::from_millis(500)), 1.0);
}

#[test]
fn test_instant_transition_is_complete_immediately() {
    assert_eq!(TransitionConfig::instant().progress(Duration::ZERO), 1.0);
}

// =============================================================================
// ChoicesConfig Tests
// =============================================================================

#[test]
fn test_choices_config_defaults() {
    let config = ChoicesConfig::default();
    assert_eq!(config.refocus_delay, Duration::from_millis(100));
    assert_eq!(config.settle_delay, Duration::from_millis(500));
    assert!(!config.reduced_motion);
}

#[test]
fn test_choices_config_builder() {
    let config = ChoicesConfig::new()
        .slide(Duration::from_millis(300), Easing::EaseOut)
        .retraction(Duration::from_millis(10), Duration::from_millis(20))
        .reduced_motion(true);

    assert_eq!(
        config.slide,
        TransitionConfig::new(Duration::from_millis(300), Easing::EaseOut)
    );
    assert_eq!(config.refocus_delay, Duration::from_millis(10));
    assert_eq!(config.settle_delay, Duration::from_millis(20));
    assert!(config.reduced_motion);
}
