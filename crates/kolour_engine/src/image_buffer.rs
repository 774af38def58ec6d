use image::{imageops, imageops::FilterType, RgbaImage};

use crate::{Color, Position, Rectangle, Size};

/// RGBA pixel buffer. A zero sized image is the "null" image.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Image {
    pixels: RgbaImage,
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image").field("width", &self.width()).field("height", &self.height()).finish()
    }
}

impl Image {
    /// Bits per pixel of every image.
    pub const DEPTH: i32 = 32;

    pub fn new(width: i32, height: i32, fill: Color) -> Self {
        let width = width.max(0) as u32;
        let height = height.max(0) as u32;
        Self {
            pixels: RgbaImage::from_pixel(width, height, fill.into()),
        }
    }

    pub fn null() -> Self {
        Self::default()
    }

    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_rgba(self) -> RgbaImage {
        self.pixels
    }

    pub fn width(&self) -> i32 {
        self.pixels.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.pixels.height() as i32
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn rect(&self) -> Rectangle {
        Rectangle::from_min_size(Position::default(), self.size())
    }

    pub fn depth(&self) -> i32 {
        Self::DEPTH
    }

    pub fn is_null(&self) -> bool {
        self.pixels.width() == 0 || self.pixels.height() == 0
    }

    pub fn pixel(&self, pos: impl Into<Position>) -> Option<Color> {
        let pos = pos.into();
        if !self.rect().is_inside(pos) {
            return None;
        }
        Some((*self.pixels.get_pixel(pos.x as u32, pos.y as u32)).into())
    }

    /// Writes are silently clipped to the image.
    pub fn set_pixel(&mut self, pos: impl Into<Position>, color: Color) {
        let pos = pos.into();
        if self.rect().is_inside(pos) {
            self.pixels.put_pixel(pos.x as u32, pos.y as u32, color.into());
        }
    }

    pub fn fill(&mut self, color: Color) {
        let color = color.into();
        for px in self.pixels.pixels_mut() {
            *px = color;
        }
    }

    pub fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        let area = rect.intersect(&self.rect());
        for y in area.y_range() {
            for x in area.x_range() {
                self.pixels.put_pixel(x as u32, y as u32, color.into());
            }
        }
    }

    /// Copies `rect` out of this image. Parts of `rect` outside the image
    /// come back transparent.
    pub fn copy(&self, rect: Rectangle) -> Image {
        let mut result = Image::new(rect.width(), rect.height(), Color::TRANSPARENT);
        let area = rect.intersect(&self.rect());
        for y in area.y_range() {
            for x in area.x_range() {
                let px = *self.pixels.get_pixel(x as u32, y as u32);
                result.pixels.put_pixel((x - rect.left()) as u32, (y - rect.top()) as u32, px);
            }
        }
        result
    }

    /// Replaces the pixels at `pos` with `src`, alpha included.
    pub fn draw_image(&mut self, src: &Image, pos: Position) {
        let target = src.rect().moved_to(pos).intersect(&self.rect());
        for y in target.y_range() {
            for x in target.x_range() {
                let px = *src.pixels.get_pixel((x - pos.x) as u32, (y - pos.y) as u32);
                self.pixels.put_pixel(x as u32, y as u32, px);
            }
        }
    }

    /// Nearest neighbour when `smooth` is false, triangle filtering otherwise.
    pub fn scaled(&self, width: i32, height: i32, smooth: bool) -> Image {
        if width <= 0 || height <= 0 || self.is_null() {
            return Image::null();
        }
        if width == self.width() && height == self.height() {
            return self.clone();
        }
        let filter = if smooth { FilterType::Triangle } else { FilterType::Nearest };
        Image {
            pixels: imageops::resize(&self.pixels, width as u32, height as u32, filter),
        }
    }
}
