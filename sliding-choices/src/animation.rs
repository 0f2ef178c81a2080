use std::time::Instant;

use crate::geometry::Geometry;
use crate::selection::Placement;
use crate::transitions::TransitionConfig;

/// What the host should paint for the indicator this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorFrame {
    /// Offset from the container's left edge.
    pub left: i32,
    pub width: u16,
    pub placement: Placement,
}

/// A single slide between two geometries.
#[derive(Debug, Clone, Copy)]
struct Slide {
    from: Geometry,
    to: Geometry,
    start: Instant,
    config: TransitionConfig,
}

impl Slide {
    fn at(&self, now: Instant) -> Geometry {
        let eased = self.config.progress(now.saturating_duration_since(self.start));
        Geometry {
            left: lerp_i32(self.from.left, self.to.left, eased),
            width: lerp_u16(self.from.width, self.to.width, eased),
        }
    }

    fn end(&self) -> Instant {
        self.start + self.config.duration
    }

    fn is_moving(&self) -> bool {
        self.from != self.to && !self.config.duration.is_zero()
    }
}

/// Drives the indicator overlay toward the latest target geometry.
///
/// Fire-and-forget: a new target replaces the running slide and starts from
/// wherever the indicator currently is.
#[derive(Debug, Clone)]
pub struct IndicatorAnimator {
    config: TransitionConfig,
    /// When true, targets are applied instantly.
    reduced_motion: bool,
    slide: Option<Slide>,
}

impl IndicatorAnimator {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            reduced_motion: false,
            slide: None,
        }
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn config(&self) -> TransitionConfig {
        self.config
    }

    /// Point the indicator at `target`.
    ///
    /// The very first target is applied without animation. Returns true if a
    /// new slide was started.
    pub fn retarget(&mut self, target: Geometry, now: Instant) -> bool {
        let from = match &self.slide {
            None => target,
            Some(slide) if slide.to == target => return false,
            Some(_) if self.reduced_motion => target,
            Some(slide) => slide.at(now),
        };

        log::debug!("[indicator] retarget {:?} -> {:?}", from, target);
        self.slide = Some(Slide {
            from,
            to: target,
            start: now,
            config: self.config,
        });
        from != target
    }

    /// The geometry the indicator is heading to.
    pub fn target(&self) -> Option<Geometry> {
        self.slide.as_ref().map(|slide| slide.to)
    }

    /// Interpolated geometry at `now`. None before the first target.
    pub fn frame(&self, now: Instant) -> Option<Geometry> {
        self.slide.as_ref().map(|slide| slide.at(now))
    }

    /// Returns true while a slide is still in progress at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.slide
            .as_ref()
            .is_some_and(|slide| slide.is_moving() && now < slide.end())
    }

    /// When the running slide finishes. None once it has finished at `now`.
    pub fn completion_time(&self, now: Instant) -> Option<Instant> {
        self.slide
            .as_ref()
            .filter(|slide| slide.is_moving())
            .map(Slide::end)
            .filter(|end| *end > now)
    }

    /// Forget everything, as if no target was ever received.
    pub fn clear(&mut self) {
        self.slide = None;
    }
}

fn lerp_i32(from: i32, to: i32, t: f32) -> i32 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as i32
}

fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as u16
}
