mod image_selection;
pub use image_selection::*;

mod text_selection;
pub use text_selection::*;

mod transparency;
pub use transparency::*;

mod text_style;
pub use text_style::*;

use crate::{command_size::SizeType, Image, Position, Rectangle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    RectangularImage,
    EllipticalImage,
    FreeFormImage,
    Text,
}

impl SelectionKind {
    pub fn is_image(self) -> bool {
        !matches!(self, SelectionKind::Text)
    }
}

impl std::fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SelectionKind::RectangularImage => "rectangular image selection",
            SelectionKind::EllipticalImage => "elliptical image selection",
            SelectionKind::FreeFormImage => "free-form image selection",
            SelectionKind::Text => "text selection",
        };
        f.write_str(name)
    }
}

/// The document's active selection.
///
/// Without content a selection is a pure border. Content is given exactly
/// once per creation cycle and removed by `delete_content` or by flattening
/// it onto the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Image(ImageSelection),
    Text(TextSelection),
}

impl From<ImageSelection> for Selection {
    fn from(value: ImageSelection) -> Self {
        Selection::Image(value)
    }
}

impl From<TextSelection> for Selection {
    fn from(value: TextSelection) -> Self {
        Selection::Text(value)
    }
}

impl Selection {
    pub fn kind(&self) -> SelectionKind {
        match self {
            Selection::Image(sel) => sel.kind(),
            Selection::Text(_) => SelectionKind::Text,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Selection::Image(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Selection::Text(_))
    }

    /// True if both are image selections or both are text selections.
    pub fn is_same_family(&self, other: &Selection) -> bool {
        self.is_image() == other.is_image()
    }

    pub fn as_image(&self) -> Option<&ImageSelection> {
        match self {
            Selection::Image(sel) => Some(sel),
            Selection::Text(_) => None,
        }
    }

    pub fn as_image_mut(&mut self) -> Option<&mut ImageSelection> {
        match self {
            Selection::Image(sel) => Some(sel),
            Selection::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextSelection> {
        match self {
            Selection::Text(sel) => Some(sel),
            Selection::Image(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextSelection> {
        match self {
            Selection::Text(sel) => Some(sel),
            Selection::Image(_) => None,
        }
    }

    pub fn bounding_rect(&self) -> Rectangle {
        match self {
            Selection::Image(sel) => sel.rect(),
            Selection::Text(sel) => sel.rect(),
        }
    }

    pub fn top_left(&self) -> Position {
        self.bounding_rect().top_left()
    }

    pub fn width(&self) -> i32 {
        self.bounding_rect().width()
    }

    pub fn height(&self) -> i32 {
        self.bounding_rect().height()
    }

    pub fn minimum_width(&self) -> i32 {
        match self {
            Selection::Image(sel) => sel.minimum_width(),
            Selection::Text(sel) => sel.minimum_width(),
        }
    }

    pub fn minimum_height(&self) -> i32 {
        match self {
            Selection::Image(sel) => sel.minimum_height(),
            Selection::Text(sel) => sel.minimum_height(),
        }
    }

    pub fn move_to(&mut self, pos: Position) {
        match self {
            Selection::Image(sel) => sel.move_to(pos),
            Selection::Text(sel) => sel.move_to(pos),
        }
    }

    pub fn move_by(&mut self, delta: Position) {
        let pos = self.top_left() + delta;
        self.move_to(pos);
    }

    pub fn is_rectangular(&self) -> bool {
        match self {
            Selection::Image(sel) => sel.is_rectangular(),
            Selection::Text(_) => true,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        match self {
            Selection::Image(sel) => sel.contains(pos),
            Selection::Text(sel) => sel.rect().is_inside(pos),
        }
    }

    pub fn points(&self) -> Vec<Position> {
        match self {
            Selection::Image(sel) => sel.points(),
            Selection::Text(sel) => sel.points(),
        }
    }

    pub fn has_content(&self) -> bool {
        match self {
            Selection::Image(sel) => sel.has_content(),
            Selection::Text(sel) => sel.has_content(),
        }
    }

    pub fn delete_content(&mut self) {
        match self {
            Selection::Image(sel) => sel.delete_content(),
            Selection::Text(sel) => sel.delete_content(),
        }
    }

    pub fn size(&self) -> SizeType {
        match self {
            Selection::Image(sel) => sel.size(),
            Selection::Text(sel) => sel.size(),
        }
    }

    pub fn paint(&self, dest: &mut Image, use_transparent: bool) {
        match self {
            Selection::Image(sel) => sel.paint(dest, use_transparent),
            Selection::Text(sel) => sel.paint(dest),
        }
    }
}
