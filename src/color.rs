use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Neon theme colours
// ---------------------------------------------------------------------------

pub const NEON_GREEN: Color32 = Color32::from_rgb(0x39, 0xFF, 0x14);
pub const NEON_CYAN: Color32 = Color32::from_rgb(0x00, 0xFF, 0xFF);
pub const NEON_ORANGE: Color32 = Color32::from_rgb(0xFF, 0x6D, 0x2D);
pub const DEEP_TEAL: Color32 = Color32::from_rgb(0x00, 0x33, 0x33);
pub const APP_BACKGROUND: Color32 = Color32::from_rgb(0x0E, 0x11, 0x17);
pub const CARD_BACKGROUND: Color32 = Color32::from_rgb(0x1E, 0x1E, 0x1E);

// ---------------------------------------------------------------------------
// Categorical palettes
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

/// Slice colours for the donut: the three neon accents first, then
/// generated hues for any extra categories.
pub fn slice_colors(n: usize) -> Vec<Color32> {
    let mut colors: Vec<Color32> = [NEON_CYAN, NEON_GREEN, NEON_ORANGE]
        .into_iter()
        .take(n)
        .collect();
    if n > colors.len() {
        colors.extend(generate_palette(n - colors.len()));
    }
    colors
}

// ---------------------------------------------------------------------------
// Continuous scale: value in [lo, hi] → Color32
// ---------------------------------------------------------------------------

/// Piecewise-linear colour scale, interpolated in linear RGB.
#[derive(Debug, Clone)]
pub struct ColorScale {
    /// `(position, colour)` with positions ascending in `[0, 1]`.
    stops: Vec<(f32, LinSrgb)>,
}

impl ColorScale {
    pub fn new(stops: &[(f32, Color32)]) -> Self {
        ColorScale {
            stops: stops
                .iter()
                .map(|&(pos, c)| (pos, to_linear(c)))
                .collect(),
        }
    }

    /// `#003333 → #00FFFF → #39FF14`, used for the salary heat grid.
    pub fn salary_heat() -> Self {
        Self::new(&[(0.0, DEEP_TEAL), (0.5, NEON_CYAN), (1.0, NEON_GREEN)])
    }

    /// Colour at position `t` (clamped to `[0, 1]`).
    pub fn at(&self, t: f32) -> Color32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let Some(&(first_pos, first)) = self.stops.first() else {
            return Color32::GRAY;
        };
        if t <= first_pos {
            return from_linear(first);
        }
        for pair in self.stops.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if t <= p1 {
                let span = p1 - p0;
                let f = if span > 0.0 { (t - p0) / span } else { 1.0 };
                return from_linear(c0.mix(c1, f));
            }
        }
        self.stops
            .last()
            .map(|&(_, c)| from_linear(c))
            .unwrap_or(Color32::GRAY)
    }

    /// Colour of `value` inside the range `[lo, hi]`. A degenerate range maps
    /// to the top of the scale.
    pub fn for_value(&self, value: f64, lo: f64, hi: f64) -> Color32 {
        if hi > lo {
            self.at(((value - lo) / (hi - lo)) as f32)
        } else {
            self.at(1.0)
        }
    }
}

/// Black or white, whichever reads better on `background`.
pub fn text_color_on(background: Color32) -> Color32 {
    let luma = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luma > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

fn to_linear(c: Color32) -> LinSrgb {
    Srgb::new(c.r(), c.g(), c.b()).into_format::<f32>().into_linear()
}

fn from_linear(c: LinSrgb) -> Color32 {
    to_color32(Srgb::from_linear(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn slice_colors_start_with_the_accents() {
        assert_eq!(slice_colors(2), vec![NEON_CYAN, NEON_GREEN]);
        let five = slice_colors(5);
        assert_eq!(five.len(), 5);
        assert_eq!(five[2], NEON_ORANGE);
    }

    #[test]
    fn heat_scale_hits_its_stops() {
        let scale = ColorScale::salary_heat();
        assert_eq!(scale.at(0.0), DEEP_TEAL);
        assert_eq!(scale.at(0.5), NEON_CYAN);
        assert_eq!(scale.at(1.0), NEON_GREEN);
        assert_eq!(scale.at(-3.0), DEEP_TEAL);
        assert_eq!(scale.at(7.0), NEON_GREEN);
    }

    #[test]
    fn value_mapping_uses_the_range() {
        let scale = ColorScale::salary_heat();
        assert_eq!(scale.for_value(10.0, 10.0, 20.0), DEEP_TEAL);
        assert_eq!(scale.for_value(20.0, 10.0, 20.0), NEON_GREEN);
        assert_eq!(scale.for_value(5.0, 5.0, 5.0), NEON_GREEN);
    }

    #[test]
    fn text_contrast() {
        assert_eq!(text_color_on(NEON_GREEN), Color32::BLACK);
        assert_eq!(text_color_on(DEEP_TEAL), Color32::WHITE);
    }
}
