use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Colour of the averaged spectrum.
pub const AVERAGE_COLOR: Color32 = Color32::BLACK;

/// Opacity applied to raw sample traces.
const TRACE_OPACITY: f32 = 0.5;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Semi-transparent palette for `n` sample traces.
pub fn trace_palette(n: usize) -> Vec<Color32> {
    generate_palette(n)
        .into_iter()
        .map(|c| c.gamma_multiply(TRACE_OPACITY))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn palette_colours_are_distinct() {
        let colours = generate_palette(5);
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn trace_colours_are_translucent() {
        for c in trace_palette(3) {
            assert!(c.a() < 255);
        }
    }
}
