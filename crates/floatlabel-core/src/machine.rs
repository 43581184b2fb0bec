//! Label state machine.
//!
//! Decides whether a requested state is a transition, orders the width and
//! transform updates, and settles the state once an animation completes.
//! The machine is pure: it returns [`LabelCommand`]s and leaves applying them
//! to the caller.

use kurbo::Affine;
use log::{debug, warn};
use std::time::Duration;

use crate::geometry::LabelGeometry;
use crate::state::{DisplayState, LabelPhase};

/// Identifies one animated transition.
///
/// Tickets increase monotonically; only the latest one may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationTicket(pub u64);

/// When the width update runs relative to the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthOrder {
    /// Shrink the available width before the label moves up.
    BeforeTransform,
    /// Grow the width back only once the label is centered again.
    AfterTransform,
}

impl WidthOrder {
    /// Ordering for a transition into `phase`.
    pub fn entering(phase: LabelPhase) -> Self {
        match phase {
            LabelPhase::EnteredText => Self::BeforeTransform,
            LabelPhase::NoText => Self::AfterTransform,
        }
    }
}

/// Effect to apply to the host, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelCommand {
    /// Set the width constant, then run a layout pass.
    SetWidth(f64),
    /// Set the transform immediately.
    SetTransform(Affine),
    /// Animate the transform and report `ticket` on completion.
    AnimateTransform {
        target: Affine,
        duration: Duration,
        ticket: AnimationTicket,
    },
}

/// Transition waiting for its animation to finish.
#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    ticket: AnimationTicket,
    order: WidthOrder,
}

/// Owns the current [`DisplayState`].
#[derive(Debug, Clone, Default)]
pub struct LabelStateMachine {
    state: DisplayState,
    generation: u64,
    pending: Option<PendingTransition>,
}

impl LabelStateMachine {
    /// Create a machine in `NoText(false)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Current phase.
    pub fn phase(&self) -> LabelPhase {
        self.state.phase
    }

    /// Check if an animated transition is waiting to complete.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket of the in-flight transition, if any.
    pub fn pending_ticket(&self) -> Option<AnimationTicket> {
        self.pending.map(|p| p.ticket)
    }

    /// Request a new state.
    ///
    /// Requests for the current phase are ignored whatever their flag. Any
    /// real transition supersedes an in-flight one.
    pub fn request_state(
        &mut self,
        next: DisplayState,
        geometry: &LabelGeometry<'_>,
    ) -> Vec<LabelCommand> {
        if next.same_phase(&self.state) {
            return Vec::new();
        }

        let order = WidthOrder::entering(next.phase);
        debug!(
            "Label transition {:?} -> {:?} (animated: {}, width {:?})",
            self.state.phase, next.phase, next.animated, order
        );

        if let Some(previous) = self.pending.take() {
            debug!("Superseding in-flight transition {:?}", previous.ticket);
        }
        self.generation += 1;

        let mut commands = Vec::with_capacity(2);
        if order == WidthOrder::BeforeTransform {
            commands.push(LabelCommand::SetWidth(geometry.placeholder_width(next.phase)));
        }

        self.state = next;
        let target = geometry.placeholder_transform(next.phase);

        if next.animated {
            let ticket = AnimationTicket(self.generation);
            self.pending = Some(PendingTransition { ticket, order });
            commands.push(LabelCommand::AnimateTransform {
                target,
                duration: geometry.metrics().animation_duration(),
                ticket,
            });
        } else {
            commands.push(LabelCommand::SetTransform(target));
            if order == WidthOrder::AfterTransform {
                commands.push(LabelCommand::SetWidth(geometry.placeholder_width(next.phase)));
            }
        }

        commands
    }

    /// Complete the animation identified by `ticket`.
    ///
    /// Applies the deferred width update and settles the state. Stale or
    /// unknown tickets are discarded.
    pub fn finish_animation(
        &mut self,
        ticket: AnimationTicket,
        geometry: &LabelGeometry<'_>,
    ) -> Vec<LabelCommand> {
        let pending = match self.pending {
            Some(pending) if pending.ticket == ticket => pending,
            _ => {
                if ticket.0 <= self.generation {
                    debug!("Discarding stale animation {:?}", ticket);
                } else {
                    warn!("Animation {:?} completed but was never scheduled", ticket);
                }
                return Vec::new();
            }
        };
        self.pending = None;

        let mut commands = Vec::new();
        if pending.order == WidthOrder::AfterTransform {
            commands.push(LabelCommand::SetWidth(geometry.placeholder_width(self.state.phase)));
        }

        self.state = self.state.settled();
        debug!("Label settled in {:?}", self.state.phase);
        commands
    }

    /// Re-apply width and transform for the current phase, unanimated.
    ///
    /// Used when the bounds change.
    pub fn relayout(&self, geometry: &LabelGeometry<'_>) -> Vec<LabelCommand> {
        vec![
            LabelCommand::SetWidth(geometry.placeholder_width(self.state.phase)),
            LabelCommand::SetTransform(geometry.placeholder_transform(self.state.phase)),
        ]
    }
}
