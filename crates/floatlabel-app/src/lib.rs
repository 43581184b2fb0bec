//! Floating-label text view demo application
//!
//! Drives the control through a scripted editing session on a simulated
//! frame clock and logs every label transition.
//!
//! The session is headless: nothing opens a window or draws a frame. Inside
//! an egui application the control is rendered by
//! [`floatlabel_widgets::FloatingLabelTextEdit`].

mod session;

pub use session::{
    FrameRecord, ScriptStep, SessionConfig, SessionError, SessionReport, default_script,
    run_session,
};
