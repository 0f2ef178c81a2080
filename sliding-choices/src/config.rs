//! Widget configuration.

use std::time::Duration;

use crate::transitions::{Easing, TransitionConfig};

/// Timing and motion settings for a [`crate::SlidingChoices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoicesConfig {
    /// Slide used when the focus moves to another item.
    pub slide: TransitionConfig,

    /// Delay between pointer-leave and the focus returning to the
    /// committed item.
    pub refocus_delay: Duration,

    /// Delay between pointer-leave and the indicator being marked settled.
    pub settle_delay: Duration,

    /// Apply every slide instantly.
    pub reduced_motion: bool,
}

impl Default for ChoicesConfig {
    fn default() -> Self {
        Self {
            slide: TransitionConfig::default(),
            refocus_delay: Duration::from_millis(100),
            settle_delay: Duration::from_millis(500),
            reduced_motion: false,
        }
    }
}

impl ChoicesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slide duration and curve.
    pub fn slide(mut self, duration: Duration, easing: Easing) -> Self {
        self.slide = TransitionConfig::new(duration, easing);
        self
    }

    /// Set both retraction delays.
    pub fn retraction(mut self, refocus: Duration, settle: Duration) -> Self {
        self.refocus_delay = refocus;
        self.settle_delay = settle;
        self
    }

    /// Enable or disable reduced motion.
    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }
}
