//! Fill palette for the drifting polygons.

use ratatui::style::Color;

/// Alpha baked into every palette entry.
pub const PALETTE_ALPHA: f64 = 0.2;

/// Polygon fill colors: royal blue, medium purple, hot pink, dodger blue,
/// light blue.
pub const PALETTE: [(u8, u8, u8); 5] = [
    (65, 105, 225),
    (147, 112, 219),
    (255, 105, 180),
    (30, 144, 255),
    (173, 216, 230),
];

/// Scale a palette entry toward black by the entity's opacity.
///
/// The effective alpha is the entity opacity compounded with the palette
/// alpha, so a settled entity strokes at roughly 0.04 of the base color.
pub fn faded(rgb: (u8, u8, u8), opacity: f64) -> Color {
    let alpha = (opacity * PALETTE_ALPHA).clamp(0.0, 1.0);
    Color::Rgb(
        (f64::from(rgb.0) * alpha) as u8,
        (f64::from(rgb.1) * alpha) as u8,
        (f64::from(rgb.2) * alpha) as u8,
    )
}
