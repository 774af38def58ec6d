use crate::{command_size, Color, EngineError, Image, ImageSelectionTransparency, Position, Rectangle, Result, SelectionKind};

/// Border shape of an image selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSelectionShape {
    Rectangular,
    Elliptical,
    /// Polygon border in document coordinates.
    FreeForm(Vec<Position>),
}

/// Number of points used to approximate an elliptical border.
const ELLIPSE_POINTS: usize = 32;

/// An image selection: a border with an optional floating image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSelection {
    rect: Rectangle,
    shape: ImageSelectionShape,
    base_image: Option<Image>,
    transparency: ImageSelectionTransparency,
    /// One entry per pixel of the base image, true where the pixel is
    /// background. Empty while opaque or without content.
    transparency_mask: Vec<bool>,
}

impl ImageSelection {
    pub fn new(rect: Rectangle, shape: ImageSelectionShape) -> Self {
        Self {
            rect,
            shape,
            base_image: None,
            transparency: ImageSelectionTransparency::default(),
            transparency_mask: Vec::new(),
        }
    }

    pub fn rectangular(rect: Rectangle) -> Self {
        Self::new(rect, ImageSelectionShape::Rectangular)
    }

    pub fn elliptical(rect: Rectangle) -> Self {
        Self::new(rect, ImageSelectionShape::Elliptical)
    }

    /// The bounding rectangle covers every point inclusively.
    pub fn free_form(points: Vec<Position>) -> Self {
        let rect = match points.split_first() {
            Some((first, rest)) => {
                let (min, max) = rest.iter().fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
                Rectangle::from_pt(min, max)
            }
            None => Rectangle::default(),
        };
        Self::new(rect, ImageSelectionShape::FreeForm(points))
    }

    pub fn with_base_image(mut self, image: Image) -> Result<Self> {
        self.set_base_image(image)?;
        Ok(self)
    }

    pub fn with_transparency(mut self, transparency: ImageSelectionTransparency) -> Self {
        self.set_transparency(transparency);
        self
    }

    pub fn kind(&self) -> SelectionKind {
        match self.shape {
            ImageSelectionShape::Rectangular => SelectionKind::RectangularImage,
            ImageSelectionShape::Elliptical => SelectionKind::EllipticalImage,
            ImageSelectionShape::FreeForm(_) => SelectionKind::FreeFormImage,
        }
    }

    pub fn shape(&self) -> &ImageSelectionShape {
        &self.shape
    }

    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    pub fn is_rectangular(&self) -> bool {
        matches!(self.shape, ImageSelectionShape::Rectangular)
    }

    pub fn minimum_width(&self) -> i32 {
        1
    }

    pub fn minimum_height(&self) -> i32 {
        1
    }

    pub fn move_to(&mut self, pos: Position) {
        let delta = pos - self.rect.start;
        self.rect.start = pos;
        if let ImageSelectionShape::FreeForm(points) = &mut self.shape {
            for p in points.iter_mut() {
                *p += delta;
            }
        }
    }

    pub fn has_content(&self) -> bool {
        self.base_image.is_some()
    }

    pub fn base_image(&self) -> Option<&Image> {
        self.base_image.as_ref()
    }

    /// Content must match the border size exactly.
    pub fn set_base_image(&mut self, image: Image) -> Result<()> {
        if image.size() != self.rect.size {
            return Err(EngineError::invalid_bounds(format!(
                "selection content {} does not match border {}",
                image.size(),
                self.rect.size
            )));
        }
        self.base_image = Some(image);
        self.recalculate_transparency_mask();
        Ok(())
    }

    pub fn delete_content(&mut self) {
        self.base_image = None;
        self.transparency_mask.clear();
    }

    pub fn transparency(&self) -> &ImageSelectionTransparency {
        &self.transparency
    }

    pub fn set_transparency(&mut self, transparency: ImageSelectionTransparency) {
        self.transparency = transparency;
        self.recalculate_transparency_mask();
    }

    pub fn transparency_mask(&self) -> &[bool] {
        &self.transparency_mask
    }

    fn recalculate_transparency_mask(&mut self) {
        self.transparency_mask.clear();
        let Some(image) = &self.base_image else {
            return;
        };
        if self.transparency.is_opaque() {
            return;
        }
        let transparency = self.transparency;
        self.transparency_mask = image.as_rgba().pixels().map(|px| transparency.is_background((*px).into())).collect();
    }

    pub fn size(&self) -> command_size::SizeType {
        let mut size = std::mem::size_of::<Rectangle>() as command_size::SizeType;
        if let ImageSelectionShape::FreeForm(points) = &self.shape {
            size += command_size::polygon_size(points);
        }
        if let Some(image) = &self.base_image {
            size += command_size::image_size(image);
            size += self.transparency_mask.len() as command_size::SizeType / 8;
        }
        size
    }

    /// Border polygon in document coordinates.
    pub fn points(&self) -> Vec<Position> {
        let r = self.rect;
        match &self.shape {
            ImageSelectionShape::Rectangular => {
                if r.is_empty() {
                    return Vec::new();
                }
                vec![
                    r.top_left(),
                    Position::new(r.right() - 1, r.top()),
                    Position::new(r.right() - 1, r.bottom() - 1),
                    Position::new(r.left(), r.bottom() - 1),
                ]
            }
            ImageSelectionShape::Elliptical => {
                if r.is_empty() {
                    return Vec::new();
                }
                let rx = f64::from(r.width() - 1) / 2.0;
                let ry = f64::from(r.height() - 1) / 2.0;
                let cx = f64::from(r.left()) + rx;
                let cy = f64::from(r.top()) + ry;
                let mut result: Vec<Position> = Vec::with_capacity(ELLIPSE_POINTS);
                for i in 0..ELLIPSE_POINTS {
                    let angle = std::f64::consts::TAU * i as f64 / ELLIPSE_POINTS as f64;
                    let p = Position::new((cx + rx * angle.cos()).round() as i32, (cy + ry * angle.sin()).round() as i32);
                    if result.last() != Some(&p) {
                        result.push(p);
                    }
                }
                result
            }
            ImageSelectionShape::FreeForm(points) => points.clone(),
        }
    }

    /// Row major, one entry per pixel of the bounding rectangle.
    pub fn shape_mask(&self) -> Vec<bool> {
        let w = self.rect.width().max(0);
        let h = self.rect.height().max(0);
        let mut mask = Vec::with_capacity((w * h) as usize);
        for y in 0..h {
            for x in 0..w {
                mask.push(self.shape_contains_local(x, y));
            }
        }
        mask
    }

    pub fn contains(&self, pos: Position) -> bool {
        if !self.rect.is_inside(pos) {
            return false;
        }
        self.shape_contains_local(pos.x - self.rect.left(), pos.y - self.rect.top())
    }

    fn shape_contains_local(&self, x: i32, y: i32) -> bool {
        match &self.shape {
            ImageSelectionShape::Rectangular => true,
            ImageSelectionShape::Elliptical => {
                let rx = f64::from(self.rect.width()) / 2.0;
                let ry = f64::from(self.rect.height()) / 2.0;
                let dx = (f64::from(x) + 0.5 - rx) / rx;
                let dy = (f64::from(y) + 0.5 - ry) / ry;
                dx * dx + dy * dy <= 1.0
            }
            ImageSelectionShape::FreeForm(points) => {
                let p = Position::new(x + self.rect.left(), y + self.rect.top());
                points.contains(&p) || polygon_contains(points, f64::from(p.x) + 0.5, f64::from(p.y) + 0.5)
            }
        }
    }

    /// Paints the content onto `dest` inside the border shape.
    ///
    /// With `use_transparent` background pixels and fully transparent pixels
    /// are skipped, otherwise the content replaces the document verbatim.
    pub fn paint(&self, dest: &mut Image, use_transparent: bool) {
        let Some(image) = &self.base_image else {
            return;
        };
        let shape = self.shape_mask();
        let w = self.rect.width();
        for y in 0..self.rect.height() {
            for x in 0..w {
                let i = (y * w + x) as usize;
                if !shape[i] {
                    continue;
                }
                let Some(color) = image.pixel((x, y)) else {
                    continue;
                };
                if use_transparent && (color.is_transparent() || self.transparency_mask.get(i).copied().unwrap_or(false)) {
                    continue;
                }
                dest.set_pixel(self.rect.start + Position::new(x, y), color);
            }
        }
    }

    /// Fills the content inside the border shape.
    pub fn fill_content(&mut self, color: Color) {
        let shape = self.shape_mask();
        let w = self.rect.width();
        let Some(image) = &mut self.base_image else {
            return;
        };
        for (i, inside) in shape.iter().enumerate() {
            if *inside {
                let i = i as i32;
                image.set_pixel((i % w, i / w), color);
            }
        }
        self.recalculate_transparency_mask();
    }

    /// A selection of the same shape covering `rect` whose content, if any,
    /// is this content scaled to fit. Free-form points are scaled with it.
    pub fn scaled_to(&self, rect: Rectangle, smooth: bool) -> Result<ImageSelection> {
        let shape = match &self.shape {
            ImageSelectionShape::FreeForm(points) => {
                ImageSelectionShape::FreeForm(points.iter().map(|p| scale_point(*p, self.rect, rect)).collect())
            }
            shape => shape.clone(),
        };
        let mut result = ImageSelection::new(rect, shape).with_transparency(self.transparency);
        if let Some(image) = &self.base_image {
            result.set_base_image(image.scaled(rect.width(), rect.height(), smooth))?;
        }
        Ok(result)
    }
}

/// Maps a border point of `from` onto the matching point of `to`.
fn scale_point(p: Position, from: Rectangle, to: Rectangle) -> Position {
    fn axis(v: i32, from_start: i32, from_len: i32, to_start: i32, to_len: i32) -> i32 {
        if from_len <= 1 {
            return to_start;
        }
        let t = f64::from(v - from_start) / f64::from(from_len - 1);
        to_start + (t * f64::from(to_len - 1)).round() as i32
    }
    Position::new(
        axis(p.x, from.left(), from.width(), to.left(), to.width()),
        axis(p.y, from.top(), from.height(), to.top(), to.height()),
    )
}

/// Even-odd rule.
fn polygon_contains(points: &[Position], x: f64, y: f64) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = (f64::from(points[i].x) + 0.5, f64::from(points[i].y) + 0.5);
        let (xj, yj) = (f64::from(points[j].x) + 0.5, f64::from(points[j].y) + 0.5);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
