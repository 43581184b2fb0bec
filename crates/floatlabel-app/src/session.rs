//! Scripted editing session on a simulated frame clock.
//!
//! Events are fed to the control directly and the [`FrameAnimator`] is ticked
//! by hand; no egui context or window is involved.

use floatlabel_core::{ConfigError, DisplayState, LabelMetrics, TextViewEvent};
use floatlabel_widgets::{EguiTextView, FrameAnimator};
use kurbo::{Affine, Size};
use log::{debug, info};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid metrics: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid argument: {0}")]
    Argument(String),
}

/// Settings for one session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Metrics JSON file; defaults are used when absent.
    pub metrics_path: Option<PathBuf>,
    /// Control width in points.
    pub width: f64,
    /// Simulated frame rate.
    pub fps: f64,
    /// Extra time simulated after the last scripted event, in seconds.
    pub tail: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            metrics_path: None,
            width: 200.0,
            fps: 60.0,
            tail: 0.5,
        }
    }
}

impl SessionConfig {
    /// Parse `[metrics.json] [width]`.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, SessionError> {
        let mut config = Self::default();
        let mut args = args.into_iter();
        if let Some(path) = args.next() {
            config.metrics_path = Some(PathBuf::from(path));
        }
        if let Some(width) = args.next() {
            config.width = width
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite() && *w > 0.0)
                .ok_or_else(|| SessionError::Argument(format!("width: {width}")))?;
        }
        Ok(config)
    }
}

/// An editor event at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    pub time: f64,
    pub event: TextViewEvent,
}

impl ScriptStep {
    pub fn new(time: f64, event: TextViewEvent) -> Self {
        Self { time, event }
    }
}

/// Focus, type, blur (label stays docked), clear and blur (label undocks),
/// then toggle focus faster than the animation.
pub fn default_script() -> Vec<ScriptStep> {
    use TextViewEvent::*;
    vec![
        ScriptStep::new(0.2, FocusGained),
        ScriptStep::new(0.8, TextChanged("H".into())),
        ScriptStep::new(0.9, TextChanged("Hi".into())),
        ScriptStep::new(1.5, FocusLost),
        ScriptStep::new(2.0, FocusGained),
        ScriptStep::new(2.1, TextChanged(String::new())),
        ScriptStep::new(2.4, FocusLost),
        ScriptStep::new(3.0, FocusGained),
        ScriptStep::new(3.1, FocusLost),
    ]
}

/// Label state on one simulated frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    pub time: f64,
    pub state: DisplayState,
    pub placeholder_width: f64,
    pub transform: Affine,
}

/// What a session observed.
#[derive(Debug, Clone, Default)]
pub struct SessionReport {
    pub frames: Vec<FrameRecord>,
    pub text_changes: Vec<String>,
    pub ended_editing: Vec<String>,
}

impl SessionReport {
    pub fn final_state(&self) -> Option<DisplayState> {
        self.frames.last().map(|f| f.state)
    }
}

/// Run `script` against a fresh control.
pub fn run_session(
    config: &SessionConfig,
    script: &[ScriptStep],
) -> Result<SessionReport, SessionError> {
    let metrics = match &config.metrics_path {
        Some(path) => LabelMetrics::load(path)?,
        None => LabelMetrics::default(),
    };
    info!(
        "Session: width {} at {} fps, control height {}",
        config.width,
        config.fps,
        metrics.const_height()
    );

    let host = FrameAnimator::new(Size::new(config.width, metrics.const_height()));
    let mut view: EguiTextView = EguiTextView::with_metrics(host, metrics)?;

    let text_changes = Rc::new(RefCell::new(Vec::new()));
    let ended_editing = Rc::new(RefCell::new(Vec::new()));
    {
        let sink = text_changes.clone();
        view.on_text_change(move |text| sink.borrow_mut().push(text.to_string()));
        let sink = ended_editing.clone();
        view.on_end_editing(move |text| {
            info!("Editing ended with {text:?}");
            sink.borrow_mut().push(text.to_string());
        });
    }

    let end = script.iter().map(|s| s.time).fold(0.0, f64::max) + config.tail;
    let frame_time = 1.0 / config.fps;
    let mut steps = script.iter().peekable();
    let mut frames = Vec::new();
    let mut frame = 0u64;

    loop {
        let now = frame as f64 * frame_time;
        if now > end {
            break;
        }

        if let Some(ticket) = view.host_mut().tick(now) {
            view.finish_animation(ticket);
        }
        while let Some(step) = steps.next_if(|s| s.time <= now) {
            debug!("{:.3}s: {:?}", now, step.event);
            view.handle_event(step.event.clone());
        }

        let record = FrameRecord {
            time: now,
            state: view.state(),
            placeholder_width: view.host().placeholder_width(),
            transform: view.host().presented_transform(),
        };
        if frames.last().is_none_or(|last: &FrameRecord| last.state != record.state) {
            info!(
                "{:.3}s: {:?} width {:.1} scale {:.3}",
                now,
                record.state,
                record.placeholder_width,
                record.transform.as_coeffs()[0]
            );
        }
        frames.push(record);
        frame += 1;
    }

    Ok(SessionReport {
        frames,
        text_changes: text_changes.take(),
        ended_editing: ended_editing.take(),
    })
}
