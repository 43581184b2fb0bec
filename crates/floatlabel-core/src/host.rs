//! Host abstraction for the placeholder label.
//!
//! The host owns the real view: it knows the control bounds, solves layout
//! and runs animations. The control only reads bounds from it and writes
//! computed widths and transforms into it.

use kurbo::{Affine, Size};
use std::time::Duration;

use crate::machine::AnimationTicket;

/// Scene node hosting the placeholder label.
pub trait LabelHost {
    /// Current bounds of the control.
    fn bounds(&self) -> Size;

    /// Set the width constraint constant of the placeholder label.
    fn apply_placeholder_width(&mut self, width: f64);

    /// Re-solve layout now so the next frame sees the new width.
    fn layout_if_needed(&mut self);

    /// Set the placeholder transform immediately, cancelling nothing.
    fn apply_placeholder_transform(&mut self, transform: Affine);

    /// Animate the placeholder transform towards `target` over `duration`.
    ///
    /// When the animation ends the host must report `ticket` back through
    /// [`crate::FloatingLabelTextView::finish_animation`].
    fn schedule_transform_animation(
        &mut self,
        duration: Duration,
        target: Affine,
        ticket: AnimationTicket,
    );
}
