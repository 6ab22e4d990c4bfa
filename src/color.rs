use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Categorical palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| hsl_color((i as f32 / n as f32) * 360.0, 0.65, 0.55))
        .collect()
}

// ---------------------------------------------------------------------------
// Continuous scales: value → Color32
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScale {
    /// Dark purple → teal → yellow.
    Viridis,
    /// Red → yellow → green.
    RedYellowGreen,
}

impl ColorScale {
    /// Colour at position `t` in `[0, 1]` (clamped).
    pub fn color_at(self, t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            ColorScale::Viridis => hsl_color(275.0 - 220.0 * t, 0.7, 0.3 + 0.3 * t),
            ColorScale::RedYellowGreen => hsl_color(120.0 * t, 0.7, 0.45),
        }
    }

    /// Position `value` linearly between `min` and `max`. A degenerate range
    /// maps to the top of the scale.
    pub fn map(self, value: f64, min: f64, max: f64) -> Color32 {
        let range = max - min;
        let t = if range > 0.0 { (value - min) / range } else { 1.0 };
        self.color_at(t as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_distinct_colours() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        for i in 0..p.len() {
            for j in i + 1..p.len() {
                assert_ne!(p[i], p[j]);
            }
        }
    }

    #[test]
    fn red_yellow_green_endpoints() {
        let low = ColorScale::RedYellowGreen.color_at(0.0);
        let high = ColorScale::RedYellowGreen.color_at(1.0);
        assert!(low.r() > low.g());
        assert!(high.g() > high.r());
    }

    #[test]
    fn map_clamps_and_handles_flat_range() {
        let s = ColorScale::Viridis;
        assert_eq!(s.map(-5.0, 0.0, 10.0), s.color_at(0.0));
        assert_eq!(s.map(50.0, 0.0, 10.0), s.color_at(1.0));
        assert_eq!(s.map(3.0, 3.0, 3.0), s.color_at(1.0));
    }
}
