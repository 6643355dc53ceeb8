//! Theme configuration
//!
//! Control styles can be loaded from a TOML document with one table per
//! control. Every key is optional and colors are hex strings:
//!
//! ```toml
//! [text_field]
//! corner_radius = 12.0
//! active_border_color = "#FF8000"
//!
//! [text_view]
//! inactive_border_color = "#AAAAAA"
//!
//! [button]
//! ripple = true
//! background_color = "#3366CC"
//! ```

use std::fs;
use std::path::Path;

use matkit_core::Color;
use serde::{Deserialize, Serialize};

use crate::border::CornerStyle;
use crate::button::ButtonStyle;
use crate::error::{Result, WidgetError};
use crate::floating_label::FieldStyle;
use crate::text_view::TextViewStyle;

// =============================================================================
// Document
// =============================================================================

/// A theme document
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub text_field: TextFieldTheme,
    #[serde(default)]
    pub text_view: TextViewTheme,
    #[serde(default)]
    pub button: ButtonTheme,
}

impl ThemeConfig {
    /// Parse a theme from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ThemeConfig = toml::from_str(content)?;
        tracing::debug!("ThemeConfig: parsed");
        Ok(config)
    }

    /// Load a theme from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "ThemeConfig: loading");
        Self::from_toml_str(&content)
    }

    pub fn text_field_style(&self) -> Result<FieldStyle> {
        let t = &self.text_field;
        Ok(FieldStyle {
            corner_radius: finite("text_field.corner_radius", t.corner_radius)?,
            corner_style: if t.circular_corners {
                CornerStyle::Circular
            } else {
                CornerStyle::Quadratic
            },
            active_border_color: parse_color(
                "text_field.active_border_color",
                &t.active_border_color,
            )?,
            inactive_border_color: parse_color(
                "text_field.inactive_border_color",
                &t.inactive_border_color,
            )?,
            active_line_width: finite("text_field.active_line_width", t.active_line_width)?,
            inactive_line_width: finite("text_field.inactive_line_width", t.inactive_line_width)?,
            label_padding: finite("text_field.label_padding", t.label_padding)?,
            floating_label_height: finite(
                "text_field.floating_label_height",
                t.floating_label_height,
            )?,
        })
    }

    pub fn text_view_style(&self) -> Result<TextViewStyle> {
        let t = &self.text_view;
        Ok(TextViewStyle {
            corner_radius: finite("text_view.corner_radius", t.corner_radius)?,
            active_border_color: parse_color(
                "text_view.active_border_color",
                &t.active_border_color,
            )?,
            inactive_border_color: parse_color(
                "text_view.inactive_border_color",
                &t.inactive_border_color,
            )?,
            active_border_width: finite("text_view.active_border_width", t.active_border_width)?,
            inactive_border_width: finite(
                "text_view.inactive_border_width",
                t.inactive_border_width,
            )?,
            text_color: parse_color("text_view.text_color", &t.text_color)?,
            placeholder_color: parse_color("text_view.placeholder_color", &t.placeholder_color)?,
            caption_color: parse_color("text_view.caption_color", &t.caption_color)?,
        })
    }

    pub fn button_style(&self) -> Result<ButtonStyle> {
        let b = &self.button;
        Ok(ButtonStyle {
            background_color: parse_color("button.background_color", &b.background_color)?,
            border_color: parse_color("button.border_color", &b.border_color)?,
            border_width: finite("button.border_width", b.border_width)?,
            corner_radius: finite("button.corner_radius", b.corner_radius)?,
            title_color: parse_color("button.title_color", &b.title_color)?,
            font_size: finite("button.font_size", b.font_size)?,
            highlight_scale: finite("button.highlight_scale", b.highlight_scale)?,
            highlight_duration: finite("button.highlight_duration", b.highlight_duration)?,
            selected_scale: finite("button.selected_scale", b.selected_scale)?,
            selected_duration: finite("button.selected_duration", b.selected_duration)?,
            ripple_enabled: b.ripple,
            ripple_color: parse_color("button.ripple_color", &b.ripple_color)?,
            ripple_speed: finite("button.ripple_speed", b.ripple_speed)?,
            loader_fade_duration: finite("button.loader_fade_duration", b.loader_fade_duration)?,
        })
    }

    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color> {
    Color::from_hex_str(value).map_err(|source| WidgetError::InvalidColor { field, source })
}

/// TOML accepts `nan` and `inf`; neither makes sense as a size or duration
fn finite(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WidgetError::NonFiniteValue { field, value })
    }
}

// =============================================================================
// [text_field]
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextFieldTheme {
    #[serde(default = "default_field_radius")]
    pub corner_radius: f32,
    /// Trace corners as circle arcs instead of quadratic curves
    #[serde(default)]
    pub circular_corners: bool,
    #[serde(default = "default_orange")]
    pub active_border_color: String,
    #[serde(default = "default_dark_gray")]
    pub inactive_border_color: String,
    #[serde(default = "default_active_width")]
    pub active_line_width: f32,
    #[serde(default = "default_inactive_width")]
    pub inactive_line_width: f32,
    #[serde(default = "default_label_padding")]
    pub label_padding: f32,
    #[serde(default = "default_floating_label_height")]
    pub floating_label_height: f32,
}

impl Default for TextFieldTheme {
    fn default() -> Self {
        Self {
            corner_radius: default_field_radius(),
            circular_corners: false,
            active_border_color: default_orange(),
            inactive_border_color: default_dark_gray(),
            active_line_width: default_active_width(),
            inactive_line_width: default_inactive_width(),
            label_padding: default_label_padding(),
            floating_label_height: default_floating_label_height(),
        }
    }
}

fn default_field_radius() -> f32 {
    10.0
}

fn default_orange() -> String {
    "#FF8000".to_string()
}

fn default_dark_gray() -> String {
    "#555555".to_string()
}

fn default_active_width() -> f32 {
    2.0
}

fn default_inactive_width() -> f32 {
    1.0
}

fn default_label_padding() -> f32 {
    10.0
}

fn default_floating_label_height() -> f32 {
    30.0
}

// =============================================================================
// [text_view]
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextViewTheme {
    #[serde(default = "default_view_radius")]
    pub corner_radius: f32,
    #[serde(default = "default_light_gray")]
    pub active_border_color: String,
    #[serde(default = "default_light_gray")]
    pub inactive_border_color: String,
    #[serde(default = "default_active_width")]
    pub active_border_width: f32,
    #[serde(default = "default_inactive_width")]
    pub inactive_border_width: f32,
    #[serde(default = "default_black")]
    pub text_color: String,
    #[serde(default = "default_gray")]
    pub placeholder_color: String,
    #[serde(default = "default_dark_gray")]
    pub caption_color: String,
}

impl Default for TextViewTheme {
    fn default() -> Self {
        Self {
            corner_radius: default_view_radius(),
            active_border_color: default_light_gray(),
            inactive_border_color: default_light_gray(),
            active_border_width: default_active_width(),
            inactive_border_width: default_inactive_width(),
            text_color: default_black(),
            placeholder_color: default_gray(),
            caption_color: default_dark_gray(),
        }
    }
}

fn default_view_radius() -> f32 {
    8.0
}

fn default_light_gray() -> String {
    "#AAAAAA".to_string()
}

fn default_gray() -> String {
    "#808080".to_string()
}

fn default_black() -> String {
    "#000000".to_string()
}

// =============================================================================
// [button]
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ButtonTheme {
    #[serde(default = "default_button_background")]
    pub background_color: String,
    #[serde(default = "default_transparent")]
    pub border_color: String,
    #[serde(default)]
    pub border_width: f32,
    #[serde(default)]
    pub corner_radius: f32,
    #[serde(default = "default_white")]
    pub title_color: String,
    #[serde(default = "default_button_font_size")]
    pub font_size: f32,
    #[serde(default = "default_press_scale")]
    pub highlight_scale: f32,
    #[serde(default = "default_press_duration")]
    pub highlight_duration: f32,
    #[serde(default = "default_press_scale")]
    pub selected_scale: f32,
    #[serde(default = "default_press_duration")]
    pub selected_duration: f32,
    #[serde(default)]
    pub ripple: bool,
    #[serde(default = "default_ripple_color")]
    pub ripple_color: String,
    #[serde(default = "default_ripple_speed")]
    pub ripple_speed: f32,
    #[serde(default = "default_loader_fade")]
    pub loader_fade_duration: f32,
}

impl Default for ButtonTheme {
    fn default() -> Self {
        Self {
            background_color: default_button_background(),
            border_color: default_transparent(),
            border_width: 0.0,
            corner_radius: 0.0,
            title_color: default_white(),
            font_size: default_button_font_size(),
            highlight_scale: default_press_scale(),
            highlight_duration: default_press_duration(),
            selected_scale: default_press_scale(),
            selected_duration: default_press_duration(),
            ripple: false,
            ripple_color: default_ripple_color(),
            ripple_speed: default_ripple_speed(),
            loader_fade_duration: default_loader_fade(),
        }
    }
}

fn default_button_background() -> String {
    "#3380E6".to_string()
}

fn default_transparent() -> String {
    "#00000000".to_string()
}

fn default_white() -> String {
    "#FFFFFF".to_string()
}

fn default_button_font_size() -> f32 {
    16.0
}

fn default_press_scale() -> f32 {
    0.97
}

fn default_press_duration() -> f32 {
    0.2
}

fn default_ripple_color() -> String {
    "#FFFFFF4D".to_string()
}

fn default_ripple_speed() -> f32 {
    1.0
}

fn default_loader_fade() -> f32 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let theme = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(theme, ThemeConfig::default());

        let field = theme.text_field_style().unwrap();
        assert_eq!(field.corner_radius, 10.0);
        assert_eq!(field.label_padding, 10.0);
        assert_eq!(field.active_line_width, 2.0);
        assert_eq!(field.corner_style, CornerStyle::Quadratic);

        let view = theme.text_view_style().unwrap();
        assert_eq!(view.corner_radius, 8.0);
        assert_eq!(view.inactive_border_width, 1.0);

        let button = theme.button_style().unwrap();
        assert_eq!(button.highlight_scale, 0.97);
        assert!(!button.ripple_enabled);
        assert!((button.ripple_color.a - 0.3).abs() < 0.01);
    }

    #[test]
    fn test_partial_tables() {
        let theme = ThemeConfig::from_toml_str(
            r##"
            [text_field]
            corner_radius = 6.0
            active_border_color = "#00F"
            circular_corners = true

            [button]
            ripple = true
            "##,
        )
        .unwrap();

        let field = theme.text_field_style().unwrap();
        assert_eq!(field.corner_radius, 6.0);
        assert_eq!(field.active_border_color, Color::BLUE);
        assert_eq!(field.corner_style, CornerStyle::Circular);
        assert_eq!(field.floating_label_height, 30.0);

        assert!(theme.button_style().unwrap().ripple_enabled);
    }

    #[test]
    fn test_invalid_color_names_field() {
        let theme = ThemeConfig::from_toml_str(
            r#"
            [text_view]
            caption_color = "not-a-color"
            "#,
        )
        .unwrap();

        match theme.text_view_style() {
            Err(WidgetError::InvalidColor { field, .. }) => {
                assert_eq!(field, "text_view.caption_color")
            }
            other => panic!("expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_match_control_styles() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.text_field_style().unwrap(), FieldStyle::default());
        assert_eq!(theme.text_view_style().unwrap(), TextViewStyle::default());
        assert_eq!(theme.button_style().unwrap(), ButtonStyle::default());
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        let theme = ThemeConfig::from_toml_str("[text_field]\ncorner_radius = nan\n").unwrap();
        match theme.text_field_style() {
            Err(WidgetError::NonFiniteValue { field, value }) => {
                assert_eq!(field, "text_field.corner_radius");
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteValue, got {other:?}"),
        }

        let theme = ThemeConfig::from_toml_str("[text_view]\nactive_border_width = inf\n").unwrap();
        assert!(matches!(
            theme.text_view_style(),
            Err(WidgetError::NonFiniteValue { field: "text_view.active_border_width", .. })
        ));

        let theme = ThemeConfig::from_toml_str("[button]\nripple_speed = -inf\n").unwrap();
        assert!(matches!(
            theme.button_style(),
            Err(WidgetError::NonFiniteValue { field: "button.ripple_speed", .. })
        ));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = ThemeConfig::from_toml_str("[text_field\ncorner_radius = ").unwrap_err();
        assert!(matches!(err, WidgetError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ThemeConfig::load(Path::new("/nonexistent/matkit-theme.toml")).unwrap_err();
        assert!(matches!(err, WidgetError::Io(_)));
    }

    #[test]
    fn test_serialized_theme_parses_back() {
        let mut theme = ThemeConfig::default();
        theme.button.ripple = true;
        let text = theme.to_toml().unwrap();
        assert_eq!(ThemeConfig::from_toml_str(&text).unwrap(), theme);
    }
}
