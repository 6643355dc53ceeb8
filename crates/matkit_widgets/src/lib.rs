//! matkit Widgets
//!
//! Outlined material controls built on `matkit_core` drawing and
//! `matkit_animation` timing:
//!
//! - **Border Paths**: rounded outlines with a gap for a floating label
//! - **Floating Label**: the focus/gap state machine driving the outline
//! - **MaterialTextField**: single-line field with accessory, secure entry
//!   and validation message
//! - **MaterialTextView**: multi-line view with placeholder overlay
//! - **MaterialButton**: press scale, ripples and inline loader
//! - **Theme**: TOML theme documents resolved into control styles
//!
//! Controls are single-threaded: call `process_focus_events`, `update` and
//! `paint` from the thread that owns them. Only the [`FocusSignal`] handed
//! out at construction may be moved elsewhere.

pub mod border;
pub mod button;
pub mod error;
pub mod error_label;
pub mod floating_label;
pub mod focus;
pub mod placeholder;
pub mod text_field;
pub mod text_measure;
pub mod text_view;
pub mod theme;

pub use border::{BorderPathBuilder, BorderPaths, CornerStyle, GapInterval, Geometry};
pub use button::{ButtonStyle, MaterialButton, Ripple, Spinner};
pub use error::{Result, WidgetError};
pub use error_label::ErrorLabel;
pub use floating_label::{
    FieldState, FieldStyle, FloatingLabelFieldController, LabelPlacement, RenderInstruction,
};
pub use focus::{FocusEvent, FocusSignal};
pub use placeholder::{HeightConstraint, PlaceholderOverlay, VerticalAlignment};
pub use text_field::{LeftAccessory, MaterialTextField, TextFieldState};
pub use text_measure::{
    EstimatedTextMeasurer, FixedAdvanceMeasurer, FontMetrics, TextMeasurer, TextMetrics,
};
pub use text_view::{MaterialTextView, TextViewStyle};
pub use theme::{ButtonTheme, TextFieldTheme, TextViewTheme, ThemeConfig};

/// Commonly used items
pub mod prelude {
    pub use crate::border::{BorderPathBuilder, GapInterval, Geometry};
    pub use crate::button::{ButtonStyle, MaterialButton};
    pub use crate::floating_label::{FieldStyle, FloatingLabelFieldController};
    pub use crate::focus::FocusSignal;
    pub use crate::text_field::MaterialTextField;
    pub use crate::text_measure::{EstimatedTextMeasurer, FontMetrics, TextMeasurer};
    pub use crate::text_view::{MaterialTextView, TextViewStyle};
    pub use crate::theme::ThemeConfig;
}
