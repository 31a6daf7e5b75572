use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Line colour of the monthly trend chart.
pub const TREND: Color32 = Color32::from_rgb(0x2a, 0x7d, 0xe1);

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn bar_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length_and_distinct_hues() {
        assert!(bar_palette(0).is_empty());
        let colors = bar_palette(8);
        assert_eq!(colors.len(), 8);
        assert_ne!(colors[0], colors[4]);
    }
}
