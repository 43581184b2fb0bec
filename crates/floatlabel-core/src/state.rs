//! Display state definitions.

/// Where the placeholder label sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelPhase {
    /// Full-size label centered over the empty body.
    #[default]
    NoText,
    /// Shrunk label docked above the body.
    EnteredText,
}

/// Logical phase plus the transient "animation in flight" flag.
///
/// Equality compares both fields. Use [`DisplayState::same_phase`] to decide
/// whether a request is a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayState {
    pub phase: LabelPhase,
    pub animated: bool,
}

impl DisplayState {
    pub const fn new(phase: LabelPhase, animated: bool) -> Self {
        Self { phase, animated }
    }

    /// `NoText(animated)`.
    pub const fn no_text(animated: bool) -> Self {
        Self::new(LabelPhase::NoText, animated)
    }

    /// `EnteredText(animated)`.
    pub const fn entered_text(animated: bool) -> Self {
        Self::new(LabelPhase::EnteredText, animated)
    }

    /// Check if both states have the same phase, ignoring the flag.
    pub fn same_phase(&self, other: &Self) -> bool {
        self.phase == other.phase
    }

    /// The same phase with the animation flag cleared.
    pub fn settled(self) -> Self {
        Self::new(self.phase, false)
    }

    /// Check if the label is docked.
    pub fn is_docked(&self) -> bool {
        self.phase == LabelPhase::EnteredText
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(DisplayState::default(), DisplayState::no_text(false));
    }

    #[test]
    fn test_same_phase_ignores_flag() {
        assert!(DisplayState::no_text(true).same_phase(&DisplayState::no_text(false)));
        assert!(!DisplayState::no_text(false).same_phase(&DisplayState::entered_text(false)));
        assert_ne!(DisplayState::entered_text(true), DisplayState::entered_text(false));
    }

    #[test]
    fn test_settled() {
        let settled = DisplayState::entered_text(true).settled();
        assert_eq!(settled, DisplayState::entered_text(false));
        assert!(settled.is_docked());
    }
}
