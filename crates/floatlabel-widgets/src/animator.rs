//! Frame-clock host for the placeholder label.
//!
//! Holds the presented width and transform of the label and animates the
//! transform against a clock in seconds, the way egui reports
//! `InputState::time`.

use floatlabel_core::{AnimationTicket, LabelHost};
use kurbo::{Affine, Size};
use log::trace;
use std::time::Duration;

/// In-flight transform animation.
#[derive(Debug, Clone, Copy)]
struct TransformAnimation {
    from: Affine,
    to: Affine,
    start: f64,
    duration: f64,
    ticket: AnimationTicket,
}

impl TransformAnimation {
    fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    fn value(&self, now: f64) -> Affine {
        lerp_affine(self.from, self.to, ease_in_out(self.progress(now)))
    }
}

/// [`LabelHost`] driven by explicit clock ticks.
#[derive(Debug, Clone)]
pub struct FrameAnimator {
    bounds: Size,
    placeholder_width: f64,
    transform: Affine,
    animation: Option<TransformAnimation>,
    now: f64,
    layout_passes: u64,
}

impl FrameAnimator {
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            placeholder_width: 0.0,
            transform: Affine::IDENTITY,
            animation: None,
            now: 0.0,
            layout_passes: 0,
        }
    }

    /// Update the bounds. The control picks them up on its next layout.
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Width constant last applied to the label.
    pub fn placeholder_width(&self) -> f64 {
        self.placeholder_width
    }

    /// Transform as currently presented, mid-animation included.
    pub fn presented_transform(&self) -> Affine {
        match &self.animation {
            Some(animation) => animation.value(self.now),
            None => self.transform,
        }
    }

    /// Transform the label ends up with once any animation completes.
    pub fn target_transform(&self) -> Affine {
        self.animation.map_or(self.transform, |a| a.to)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Current clock value.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Number of layout passes requested so far.
    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    /// Advance the clock.
    ///
    /// Returns the ticket of an animation that completed during this tick;
    /// forward it to `FloatingLabelTextView::finish_animation`.
    pub fn tick(&mut self, now: f64) -> Option<AnimationTicket> {
        self.now = now.max(self.now);
        let animation = self.animation?;
        if animation.progress(self.now) < 1.0 {
            return None;
        }
        self.animation = None;
        self.transform = animation.to;
        trace!("Animation {:?} completed at {:.3}s", animation.ticket, self.now);
        Some(animation.ticket)
    }
}

impl Default for FrameAnimator {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl LabelHost for FrameAnimator {
    fn bounds(&self) -> Size {
        self.bounds
    }

    fn apply_placeholder_width(&mut self, width: f64) {
        self.placeholder_width = width;
    }

    fn layout_if_needed(&mut self) {
        self.layout_passes += 1;
    }

    fn apply_placeholder_transform(&mut self, transform: Affine) {
        // Retarget an in-flight animation so its ticket still completes.
        if let Some(animation) = &mut self.animation {
            animation.from = transform;
            animation.to = transform;
        }
        self.transform = transform;
    }

    fn schedule_transform_animation(
        &mut self,
        duration: Duration,
        target: Affine,
        ticket: AnimationTicket,
    ) {
        let from = self.presented_transform();
        self.animation = Some(TransformAnimation {
            from,
            to: target,
            start: self.now,
            duration: duration.as_secs_f64(),
            ticket,
        });
    }
}

/// Smoothstep easing.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Component-wise interpolation between two affine transforms.
pub fn lerp_affine(from: Affine, to: Affine, t: f64) -> Affine {
    let a = from.as_coeffs();
    let b = to.as_coeffs();
    Affine::new(std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t))
}
