//! Text measurement
//!
//! Controls need the rendered width of their placeholder to size the border
//! gap. The host supplies a [`TextMeasurer`] backed by its font system; when
//! none is available, [`EstimatedTextMeasurer`] gives a usable approximation.

/// Font description used for measuring and drawing text
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    /// Font size in points
    pub size: f32,
    /// Font family name (None = platform default)
    pub family: Option<String>,
    /// Extra spacing between letters in points
    pub letter_spacing: f32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::system(14.0)
    }
}

impl FontMetrics {
    /// The platform default font at the given size
    pub fn system(size: f32) -> Self {
        Self {
            size,
            family: None,
            letter_spacing: 0.0,
        }
    }

    /// Set font family
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Set letter spacing
    pub fn with_letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }

    /// Height of one line of text
    pub fn line_height(&self) -> f32 {
        self.size * 1.2
    }
}

/// Text measurement result
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
}

/// Trait for measuring text dimensions
///
/// Implementations must be pure: the same text and font always measure the
/// same. Controls call this on every layout pass.
pub trait TextMeasurer: Send + Sync {
    /// Measure the unwrapped bounding box of `text`
    fn measure_with_options(&self, text: &str, font: &FontMetrics) -> TextMetrics;

    /// Width of `text`, rounded up to the next whole point
    fn measure(&self, text: &str, font: &FontMetrics) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.measure_with_options(text, font).width.ceil()
    }
}

/// A text measurer that uses estimates
///
/// About 0.55 × font size per character, which is conservative for
/// proportional fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure_with_options(&self, text: &str, font: &FontMetrics) -> TextMetrics {
        let char_count = text.chars().count() as f32;
        let base_width = char_count * font.size * 0.55;

        let letter_spacing_total = if char_count > 1.0 {
            (char_count - 1.0) * font.letter_spacing
        } else {
            0.0
        };

        TextMetrics {
            width: base_width + letter_spacing_total,
            height: font.line_height(),
        }
    }
}

/// A measurer that reports a fixed advance per character; handy for hosts
/// with monospaced fonts and for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasurer {
    pub advance: f32,
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure_with_options(&self, text: &str, font: &FontMetrics) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * self.advance,
            height: font.line_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimated_width_scales_with_font() {
        let m = EstimatedTextMeasurer;
        let small = m.measure("Email", &FontMetrics::system(10.0));
        let large = m.measure("Email", &FontMetrics::system(20.0));

        assert_eq!(small, (5.0f32 * 10.0 * 0.55).ceil());
        assert!(large > small);
    }

    #[test]
    fn test_measure_rounds_up() {
        let m = FixedAdvanceMeasurer { advance: 7.2 };
        assert_eq!(m.measure("ab", &FontMetrics::default()), 15.0);
    }

    #[test]
    fn test_empty_text_is_zero_width() {
        let m = EstimatedTextMeasurer;
        let font = FontMetrics::system(14.0).with_letter_spacing(2.0);
        assert_eq!(m.measure("", &font), 0.0);
    }

    #[test]
    fn test_letter_spacing_between_characters_only() {
        let m = EstimatedTextMeasurer;
        let font = FontMetrics::system(10.0).with_letter_spacing(1.0);
        let single = m.measure_with_options("a", &font).width;
        let double = m.measure_with_options("ab", &font).width;
        assert!((double - 2.0 * single - 1.0).abs() < 1e-5);
    }
}
