use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Continuous colour scale
// ---------------------------------------------------------------------------

/// Gradient stops (Plasma-like), dark → bright.
const STOPS: [(u8, u8, u8); 5] = [
    (0x0d, 0x08, 0x87),
    (0x7e, 0x03, 0xa8),
    (0xcc, 0x47, 0x78),
    (0xf8, 0x95, 0x40),
    (0xf0, 0xf9, 0x21),
];

/// Sample the gradient at `t` in `[0, 1]` (clamped).
pub fn gradient(t: f64) -> Color32 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let segments = (STOPS.len() - 1) as f64;
    let pos = t * segments;
    let lower = (pos.floor() as usize).min(STOPS.len() - 2);
    let factor = (pos - lower as f64) as f32;

    let a = stop_linear(STOPS[lower]);
    let b = stop_linear(STOPS[lower + 1]);
    let rgb: Srgb<u8> = Srgb::from_linear(a.mix(b, factor));
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

fn stop_linear((r, g, b): (u8, u8, u8)) -> LinSrgb {
    Srgb::new(r, g, b).into_format::<f32>().into_linear()
}

// ---------------------------------------------------------------------------
// Rating scale: average_rating → Color32
// ---------------------------------------------------------------------------

/// Maps a numeric value range onto the gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingScale {
    pub min: f64,
    pub max: f64,
}

impl RatingScale {
    /// Build a scale spanning the given values. `None` for no values.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(RatingScale { min: v, max: v }),
            Some(s) => Some(RatingScale {
                min: s.min.min(v),
                max: s.max.max(v),
            }),
        })
    }

    /// Look up the colour for a value. A zero-width scale maps to the middle.
    pub fn color_for(&self, value: f64) -> Color32 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            return gradient(0.5);
        }
        gradient((value - self.min) / span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Color32, b: Color32) -> bool {
        let d = |x: u8, y: u8| (x as i16 - y as i16).abs() <= 1;
        d(a.r(), b.r()) && d(a.g(), b.g()) && d(a.b(), b.b())
    }

    #[test]
    fn gradient_endpoints_match_stops() {
        assert!(close(gradient(0.0), Color32::from_rgb(0x0d, 0x08, 0x87)));
        assert!(close(gradient(1.0), Color32::from_rgb(0xf0, 0xf9, 0x21)));
        assert_eq!(gradient(-3.0), gradient(0.0));
        assert_eq!(gradient(7.0), gradient(1.0));
    }

    #[test]
    fn scale_spans_values() {
        let scale = RatingScale::from_values([3.2, 4.8, 4.0]).unwrap();
        assert_eq!(scale.min, 3.2);
        assert_eq!(scale.max, 4.8);
        assert_eq!(scale.color_for(3.2), gradient(0.0));
        assert_eq!(scale.color_for(4.8), gradient(1.0));
    }

    #[test]
    fn empty_and_flat_scales() {
        assert!(RatingScale::from_values(std::iter::empty()).is_none());
        let flat = RatingScale::from_values([4.0, 4.0]).unwrap();
        assert_eq!(flat.color_for(4.0), gradient(0.5));
    }
}
