//! The floating-label text view control.
//!
//! Bridges text-editing lifecycle events from the host's editor to the label
//! state machine and applies the resulting commands to the [`LabelHost`].

use kurbo::Size;
use log::trace;
use peniko::Color;

use crate::config::{ConfigResult, LabelMetrics};
use crate::geometry::LabelGeometry;
use crate::host::LabelHost;
use crate::layout::HeightConstraint;
use crate::machine::{AnimationTicket, LabelCommand, LabelStateMachine};
use crate::state::DisplayState;
use crate::style::TextViewStyle;

/// Placeholder shown until the caller sets one.
pub const DEFAULT_PLACEHOLDER: &str = "Click here";

/// Lifecycle events raised by the host's text editor.
#[derive(Debug, Clone, PartialEq)]
pub enum TextViewEvent {
    /// The editor became first responder.
    FocusGained,
    /// The text was edited.
    TextChanged(String),
    /// The editing session ended.
    FocusLost,
}

type TextCallback = Box<dyn FnMut(&str)>;

/// Multi-line text input with a floating placeholder label.
pub struct FloatingLabelTextView<H: LabelHost> {
    host: H,
    metrics: LabelMetrics,
    machine: LabelStateMachine,
    placeholder: String,
    text: Option<String>,
    style: TextViewStyle,
    on_text_change: TextCallback,
    on_end_editing: TextCallback,
    /// Bounds seen by the last layout pass.
    laid_out_bounds: Option<Size>,
}

impl<H: LabelHost> FloatingLabelTextView<H> {
    /// Create a control with the default metrics.
    pub fn new(host: H) -> Self {
        Self::build(host, LabelMetrics::default())
    }

    /// Create a control with custom metrics, validating them first.
    pub fn with_metrics(host: H, metrics: LabelMetrics) -> ConfigResult<Self> {
        metrics.validate()?;
        Ok(Self::build(host, metrics))
    }

    fn build(host: H, metrics: LabelMetrics) -> Self {
        let mut view = Self {
            host,
            metrics,
            machine: LabelStateMachine::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            text: None,
            style: TextViewStyle::default(),
            on_text_change: Box::new(|_| {}),
            on_end_editing: Box::new(|_| {}),
            laid_out_bounds: None,
        };
        view.layout();
        view
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn metrics(&self) -> &LabelMetrics {
        &self.metrics
    }

    /// Current display state.
    pub fn state(&self) -> DisplayState {
        self.machine.state()
    }

    /// Check if a dock/undock animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.machine.is_animating()
    }

    /// Geometry for the host's current bounds.
    pub fn geometry(&self) -> LabelGeometry<'_> {
        LabelGeometry::new(&self.metrics, self.host.bounds())
    }

    /// Placeholder label text.
    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder_text(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
    }

    /// Text of the body, `None` if never set.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the body text. Does not move the label.
    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    /// Mutable body buffer for editors that edit a `String` in place.
    ///
    /// Report edits through [`TextViewEvent::TextChanged`] or
    /// [`Self::notify_text_changed`].
    pub fn text_mut(&mut self) -> &mut String {
        self.text.get_or_insert_with(String::new)
    }

    /// Callback fired on every text mutation.
    pub fn on_text_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_text_change = Box::new(callback);
    }

    /// Callback fired once when the editing session ends.
    pub fn on_end_editing(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_end_editing = Box::new(callback);
    }

    pub fn style(&self) -> &TextViewStyle {
        &self.style
    }

    /// Set text and placeholder colors; the cursor uses the text color.
    pub fn set_colors(&mut self, text: Color, placeholder: Color) {
        self.style.set_colors(text, placeholder);
    }

    pub fn set_colors_with_cursor(&mut self, text: Color, placeholder: Color, cursor: Color) {
        self.style.set_colors_with_cursor(text, placeholder, cursor);
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.style.font_size = size;
    }

    /// Height the host layout should give the control.
    pub fn height_constraint(&self) -> HeightConstraint {
        HeightConstraint::for_metrics(&self.metrics)
    }

    /// Fixed intrinsic height of the control.
    pub fn intrinsic_height(&self) -> f64 {
        self.metrics.const_height()
    }

    /// Re-apply width and transform for the current bounds.
    pub fn layout(&mut self) {
        let geometry = LabelGeometry::new(&self.metrics, self.host.bounds());
        let commands = self.machine.relayout(&geometry);
        self.laid_out_bounds = Some(geometry.bounds());
        self.apply(commands);
    }

    /// Run [`Self::layout`] only if the host bounds changed since the last pass.
    pub fn layout_if_bounds_changed(&mut self) -> bool {
        if self.laid_out_bounds == Some(self.host.bounds()) {
            return false;
        }
        self.layout();
        true
    }

    /// Request a new display state.
    pub fn request_state(&mut self, next: DisplayState) {
        let geometry = LabelGeometry::new(&self.metrics, self.host.bounds());
        let commands = self.machine.request_state(next, &geometry);
        self.apply(commands);
    }

    /// Report that the host finished the animation for `ticket`.
    pub fn finish_animation(&mut self, ticket: AnimationTicket) {
        let geometry = LabelGeometry::new(&self.metrics, self.host.bounds());
        let commands = self.machine.finish_animation(ticket, &geometry);
        self.apply(commands);
    }

    /// Dispatch an editor lifecycle event.
    pub fn handle_event(&mut self, event: TextViewEvent) {
        match event {
            TextViewEvent::FocusGained => self.focus_gained(),
            TextViewEvent::TextChanged(text) => self.text_changed(text),
            TextViewEvent::FocusLost => self.focus_lost(),
        }
    }

    /// The editor gained focus: dock the label if there is no text yet.
    pub fn focus_gained(&mut self) {
        if self.is_text_empty() {
            self.request_state(DisplayState::entered_text(true));
        }
    }

    /// The editor reported new text.
    pub fn text_changed(&mut self, text: String) {
        self.text = Some(text);
        self.notify_text_changed();
    }

    /// Forward the current text to the change callback.
    pub fn notify_text_changed(&mut self) {
        let text = self.text.as_deref().unwrap_or_default();
        (self.on_text_change)(text);
    }

    /// The editing session ended: report the text and undock if it is empty.
    pub fn focus_lost(&mut self) {
        let text = self.text.as_deref().unwrap_or_default();
        (self.on_end_editing)(text);
        if self.is_text_empty() {
            self.request_state(DisplayState::no_text(true));
        }
    }

    fn is_text_empty(&self) -> bool {
        self.text.as_deref().is_none_or(str::is_empty)
    }

    fn apply(&mut self, commands: Vec<LabelCommand>) {
        for command in commands {
            match command {
                LabelCommand::SetWidth(width) => {
                    trace!("Placeholder width -> {width}");
                    self.host.apply_placeholder_width(width);
                    self.host.layout_if_needed();
                }
                LabelCommand::SetTransform(transform) => {
                    trace!("Placeholder transform -> {:?}", transform.as_coeffs());
                    self.host.apply_placeholder_transform(transform);
                }
                LabelCommand::AnimateTransform {
                    target,
                    duration,
                    ticket,
                } => {
                    trace!(
                        "Animating placeholder transform -> {:?} over {:?} ({:?})",
                        target.as_coeffs(),
                        duration,
                        ticket
                    );
                    self.host.schedule_transform_animation(duration, target, ticket);
                }
            }
        }
    }
}
