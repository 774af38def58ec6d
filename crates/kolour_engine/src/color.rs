use image::Rgba;
use serde::{Deserialize, Serialize};

/// Largest possible distance between two colors in RGB space.
const MAX_RGB_DISTANCE: f64 = 441.672_955_930_063_7; // sqrt(3 * 255^2)

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new_rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Turns a similarity in `0.0..=1.0` into a maximum RGB distance.
    pub fn process_similarity(similarity: f64) -> i32 {
        (similarity.clamp(0.0, 1.0) * MAX_RGB_DISTANCE).round() as i32
    }

    /// Two transparent colors are always similar; a transparent and an
    /// opaque one never are.
    pub fn is_similar_to(&self, other: &Color, processed_similarity: i32) -> bool {
        if self.is_transparent() || other.is_transparent() {
            return self.is_transparent() && other.is_transparent();
        }
        if processed_similarity <= 0 {
            return self.r == other.r && self.g == other.g && self.b == other.b;
        }
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        dr * dr + dg * dg + db * db <= processed_similarity * processed_similarity
    }
}

impl From<Rgba<u8>> for Color {
    fn from(value: Rgba<u8>) -> Self {
        let [r, g, b, a] = value.0;
        Color { r, g, b, a }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(value: Color) -> Self {
        Rgba([value.r, value.g, value.b, value.a])
    }
}
