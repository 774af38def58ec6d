use serde::{Deserialize, Serialize};

use crate::Color;

/// Background subtraction settings of an image selection.
///
/// An opaque selection paints every pixel. A transparent one treats pixels
/// similar to `transparent_color` as background that shows the document below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSelectionTransparency {
    opaque: bool,
    transparent_color: Color,
    color_similarity: f64,
}

impl Default for ImageSelectionTransparency {
    fn default() -> Self {
        Self::opaque()
    }
}

impl ImageSelectionTransparency {
    pub fn opaque() -> Self {
        Self {
            opaque: true,
            transparent_color: Color::WHITE,
            color_similarity: 0.0,
        }
    }

    pub fn transparent(transparent_color: Color, color_similarity: f64) -> Self {
        Self {
            opaque: false,
            transparent_color,
            color_similarity: color_similarity.clamp(0.0, 1.0),
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    pub fn is_transparent(&self) -> bool {
        !self.opaque
    }

    pub fn set_opaque(&mut self, opaque: bool) {
        self.opaque = opaque;
    }

    pub fn transparent_color(&self) -> Color {
        self.transparent_color
    }

    pub fn set_transparent_color(&mut self, color: Color) {
        self.transparent_color = color;
    }

    pub fn color_similarity(&self) -> f64 {
        self.color_similarity
    }

    pub fn set_color_similarity(&mut self, similarity: f64) {
        self.color_similarity = similarity.clamp(0.0, 1.0);
    }

    pub fn processed_color_similarity(&self) -> i32 {
        Color::process_similarity(self.color_similarity)
    }

    /// True if `color` counts as background under these settings.
    pub fn is_background(&self, color: Color) -> bool {
        !self.opaque && color.is_similar_to(&self.transparent_color, self.processed_color_similarity())
    }
}
