//! Chart series colors.
//!
//! Eight base hues cover the series charts; assignment cycles with modulo
//! wraparound once models outnumber the palette. Fill, border, and radar
//! background variants are all derived from the same base RGB so one base
//! value controls every rendering of a series.

use serde::Serialize;

/// One palette slot: a base RGB hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeriesColor {
    fn rgba(&self, alpha: &str) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Bar/doughnut fill, 0.8 alpha.
    pub fn fill(&self) -> String {
        self.rgba("0.8")
    }

    /// Border and point color, full opacity.
    pub fn border(&self) -> String {
        self.rgba("1")
    }

    /// Radar area background, 0.2 alpha.
    pub fn background(&self) -> String {
        self.rgba("0.2")
    }

    /// Opaque rgb() form for inline card accents.
    pub fn rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// The fixed chart palette: blue, red, teal, yellow, purple, orange,
/// gray, indigo.
pub const PALETTE: [SeriesColor; 8] = [
    SeriesColor { r: 54, g: 162, b: 235 },
    SeriesColor { r: 255, g: 99, b: 132 },
    SeriesColor { r: 75, g: 192, b: 192 },
    SeriesColor { r: 255, g: 206, b: 86 },
    SeriesColor { r: 153, g: 102, b: 255 },
    SeriesColor { r: 255, g: 159, b: 64 },
    SeriesColor { r: 199, g: 199, b: 199 },
    SeriesColor { r: 83, g: 102, b: 255 },
];

/// Color for the series at `index` in active-model order.
pub fn color_for(index: usize) -> SeriesColor {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycling_wraps_at_palette_size() {
        for i in 0..PALETTE.len() {
            assert_eq!(color_for(i), color_for(i + PALETTE.len()));
        }
        assert_eq!(color_for(8), color_for(0));
        assert_eq!(color_for(19), color_for(3));
    }

    #[test]
    fn test_variants_share_one_base_hue() {
        let color = color_for(0);
        assert_eq!(color.fill(), "rgba(54, 162, 235, 0.8)");
        assert_eq!(color.border(), "rgba(54, 162, 235, 1)");
        assert_eq!(color.background(), "rgba(54, 162, 235, 0.2)");
        assert_eq!(color.rgb(), "rgb(54, 162, 235)");
    }

    #[test]
    fn test_palette_hues_are_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
