//! Floating-label text view core.
//!
//! Platform-agnostic state machine and geometry engine for a multi-line text
//! input whose placeholder floats above the body once editing starts.
//! Rendering, text editing and animation timing belong to a [`LabelHost`].

pub mod config;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod machine;
pub mod state;
pub mod style;
pub mod text_view;

pub use config::{ConfigError, ConfigResult, LabelMetrics};
pub use geometry::LabelGeometry;
pub use host::LabelHost;
pub use layout::{HeightConstraint, LayoutPriority};
pub use machine::{AnimationTicket, LabelCommand, LabelStateMachine, WidthOrder};
pub use state::{DisplayState, LabelPhase};
pub use style::TextViewStyle;
pub use text_view::{DEFAULT_PLACEHOLDER, FloatingLabelTextView, TextViewEvent};
