use kolour_engine::{Color, Document, ImageSelectionTransparency, Rectangle, Result, TextStyle};

use super::ViewManager;

/// Row and column of the text cursor inside a text box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextCursor {
    pub row: usize,
    pub col: usize,
}

impl TextCursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Tool settings commands read and synchronize.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub foreground_color: Color,
    pub background_color: Color,
    image_selection_transparency: ImageSelectionTransparency,
    text_style: TextStyle,
    text_cursor: TextCursor,
    below_cursor_changes: u64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            foreground_color: Color::BLACK,
            background_color: Color::WHITE,
            image_selection_transparency: ImageSelectionTransparency::default(),
            text_style: TextStyle::default(),
            text_cursor: TextCursor::default(),
            below_cursor_changes: 0,
        }
    }
}

impl Environment {
    pub fn image_selection_transparency(&self) -> ImageSelectionTransparency {
        self.image_selection_transparency
    }

    pub fn set_image_selection_transparency(&mut self, transparency: ImageSelectionTransparency) {
        self.image_selection_transparency = transparency;
    }

    pub fn text_style(&self) -> &TextStyle {
        &self.text_style
    }

    pub fn set_text_style(&mut self, style: TextStyle) {
        self.text_style = style;
    }

    pub fn text_cursor(&self) -> TextCursor {
        self.text_cursor
    }

    pub fn set_text_cursor(&mut self, cursor: TextCursor) {
        self.text_cursor = cursor;
    }

    /// Tells the tool layer to refresh cursor shape and status bar.
    pub fn notify_something_below_cursor_changed(&mut self) {
        self.below_cursor_changes += 1;
    }

    pub fn something_below_cursor_changes(&self) -> u64 {
        self.below_cursor_changes
    }
}

/// Everything a command may touch while it runs.
pub struct CommandContext<'a> {
    pub document: &'a mut Document,
    pub environment: &'a mut Environment,
    pub view: &'a mut dyn ViewManager,
}

impl<'a> CommandContext<'a> {
    pub fn new(document: &'a mut Document, environment: &'a mut Environment, view: &'a mut dyn ViewManager) -> Self {
        Self { document, environment, view }
    }

    /// Runs `f` with view updates batched; the queue is restored even on error.
    pub fn with_queued_updates<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.view.set_queue_updates();
        let result = f(self);
        self.view.restore_queue_updates();
        result
    }

    pub fn update_region(&mut self, rect: Rectangle) {
        self.view.update_region(rect);
    }

    /// Repaints the current selection's bounding rectangle, if any.
    pub fn update_selection_region(&mut self) {
        if let Some(rect) = self.document.selection().map(kolour_engine::Selection::bounding_rect) {
            self.view.update_region(rect);
        }
    }
}
