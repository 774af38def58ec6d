use crate::{Color, EngineError, Image, ImageSelection, Position, Rectangle, Result, Selection, SelectionKind, TextSelection};

/// The canonical image plus at most one selection.
///
/// The mutation primitives are meant to be called by commands only, so every
/// change can be reverted by the command history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    image: Image,
    selection: Option<Selection>,
}

impl Document {
    pub fn new(width: i32, height: i32, fill: Color) -> Self {
        Self::from_image(Image::new(width, height, fill))
    }

    pub fn from_image(image: Image) -> Self {
        Self { image, selection: None }
    }

    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    pub fn rect(&self) -> Rectangle {
        self.image.rect()
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn set_image(&mut self, image: Image) {
        self.image = image;
    }

    pub fn get_image_at(&self, rect: Rectangle) -> Image {
        self.image.copy(rect)
    }

    pub fn set_image_at(&mut self, image: &Image, pos: Position) {
        self.image.draw_image(image, pos);
    }

    pub fn fill(&mut self, color: Color) {
        self.image.fill(color);
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn selection_mut(&mut self) -> Option<&mut Selection> {
        self.selection.as_mut()
    }

    pub fn image_selection(&self) -> Option<&ImageSelection> {
        self.selection.as_ref().and_then(Selection::as_image)
    }

    pub fn image_selection_mut(&mut self) -> Option<&mut ImageSelection> {
        self.selection.as_mut().and_then(Selection::as_image_mut)
    }

    pub fn text_selection(&self) -> Option<&TextSelection> {
        self.selection.as_ref().and_then(Selection::as_text)
    }

    pub fn text_selection_mut(&mut self) -> Option<&mut TextSelection> {
        self.selection.as_mut().and_then(Selection::as_text_mut)
    }

    /// Replaces the active selection.
    ///
    /// A floating selection may only be replaced by one of the same family;
    /// a differently typed one has to be flattened or deleted first.
    pub fn set_selection(&mut self, selection: Selection) -> Result<()> {
        if let Some(current) = &self.selection {
            if current.has_content() && !current.is_same_family(&selection) {
                return Err(EngineError::invariant(format!(
                    "can't replace floating {} with {}",
                    current.kind(),
                    selection.kind()
                )));
            }
        }
        self.selection = Some(selection);
        Ok(())
    }

    /// Removes the selection without flattening it.
    pub fn selection_delete(&mut self) -> Option<Selection> {
        self.selection.take()
    }

    fn floating_selection(selection: Option<&Selection>) -> Result<&Selection> {
        let selection = selection.ok_or(EngineError::NoSelection)?;
        if !selection.has_content() {
            return Err(EngineError::SelectionHasNoContent);
        }
        Ok(selection)
    }

    /// Stamps the content onto the image and keeps the selection floating.
    /// Returns the affected document area.
    pub fn selection_copy_onto_document(&mut self, use_transparent: bool) -> Result<Rectangle> {
        let selection = Self::floating_selection(self.selection.as_ref())?;
        let rect = selection.bounding_rect();
        selection.paint(&mut self.image, use_transparent);
        Ok(rect)
    }

    /// Flattens the content onto the image and removes the selection.
    pub fn selection_push_onto_document(&mut self, use_transparent: bool) -> Result<Rectangle> {
        let rect = self.selection_copy_onto_document(use_transparent)?;
        self.selection = None;
        Ok(rect)
    }

    /// Pixels under the image selection's border. Pixels outside the border
    /// shape are transparent.
    pub fn get_selected_base_image(&self) -> Result<Image> {
        let selection = self.selection.as_ref().ok_or(EngineError::NoSelection)?;
        let Selection::Image(sel) = selection else {
            return Err(EngineError::SelectionKindMismatch {
                expected: SelectionKind::RectangularImage,
                actual: selection.kind(),
            });
        };
        let mut image = self.image.copy(sel.rect());
        if !sel.is_rectangular() {
            let w = sel.rect().width();
            for (i, inside) in sel.shape_mask().iter().enumerate() {
                if !*inside {
                    let i = i as i32;
                    image.set_pixel((i % w, i / w), Color::TRANSPARENT);
                }
            }
        }
        Ok(image)
    }

    /// Lifts the pixels under a content-less image border into the selection
    /// and fills the vacated area with `background`.
    pub fn image_selection_pull_from_document(&mut self, background: Color) -> Result<()> {
        let content = self.get_selected_base_image()?;
        let Some(sel) = self.image_selection_mut() else {
            return Err(EngineError::NoSelection);
        };
        if sel.has_content() {
            return Err(EngineError::SelectionHasContent);
        }
        sel.set_base_image(content)?;

        let rect = sel.rect();
        let mask = sel.shape_mask();
        let w = rect.width();
        for (i, inside) in mask.iter().enumerate() {
            if *inside {
                let i = i as i32;
                self.image.set_pixel(rect.start + Position::new(i % w, i / w), background);
            }
        }
        log::debug!("pulled {rect} from document");
        Ok(())
    }
}
