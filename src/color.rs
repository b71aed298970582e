use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting at red.
pub fn generate_palette(n: usize) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series colours for the stress-strain chart
// ---------------------------------------------------------------------------

/// One colour per chart series.
#[derive(Debug, Clone, Copy)]
pub struct SeriesColors {
    /// Raw stress-strain samples (blue).
    pub curve: RGBColor,
    /// Fitted elastic line and its annotation (red).
    pub fit: RGBColor,
    /// UTS reference line and its annotation (green).
    pub uts: RGBColor,
}

impl Default for SeriesColors {
    fn default() -> Self {
        // Hues 0°, 120°, 240°.
        let palette = generate_palette(3);
        Self {
            curve: palette[2],
            fit: palette[0],
            uts: palette[1],
        }
    }
}
