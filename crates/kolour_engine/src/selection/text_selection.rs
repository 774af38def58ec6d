use crate::{command_size, EngineError, Image, Position, Rectangle, Result, TextStyle};

/// Inner padding between the box border and its text.
pub const TEXT_BORDER_SIZE: i32 = 1;

/// A text box with optional content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSelection {
    rect: Rectangle,
    lines: Option<Vec<String>>,
    style: TextStyle,
}

impl TextSelection {
    pub fn new(rect: Rectangle, style: TextStyle) -> Self {
        Self { rect, lines: None, style }
    }

    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.set_lines(lines);
        self
    }

    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    pub fn text_style(&self) -> &TextStyle {
        &self.style
    }

    pub fn set_text_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    pub fn minimum_width(&self) -> i32 {
        Self::minimum_width_for_style(&self.style)
    }

    pub fn minimum_height(&self) -> i32 {
        Self::minimum_height_for_style(&self.style)
    }

    pub fn minimum_width_for_style(_style: &TextStyle) -> i32 {
        7
    }

    pub fn minimum_height_for_style(style: &TextStyle) -> i32 {
        2 * TEXT_BORDER_SIZE + style.line_height()
    }

    pub fn move_to(&mut self, pos: Position) {
        self.rect.start = pos;
    }

    /// Same text and style in a box of the new size.
    pub fn resized(&self, width: i32, height: i32) -> TextSelection {
        TextSelection {
            rect: Rectangle::from_min_size(self.rect.start, (width, height)),
            lines: self.lines.clone(),
            style: self.style.clone(),
        }
    }

    pub fn has_content(&self) -> bool {
        self.lines.is_some()
    }

    pub fn lines(&self) -> Option<&[String]> {
        self.lines.as_deref()
    }

    /// A text box with content always has at least one line.
    pub fn set_lines(&mut self, mut lines: Vec<String>) {
        if lines.is_empty() {
            lines.push(String::new());
        }
        self.lines = Some(lines);
    }

    pub fn delete_content(&mut self) {
        self.lines = None;
    }

    pub fn text(&self) -> String {
        self.lines.as_ref().map(|lines| lines.join("\n")).unwrap_or_default()
    }

    pub fn size(&self) -> command_size::SizeType {
        let mut size = std::mem::size_of::<Rectangle>() as command_size::SizeType + command_size::string_size(&self.style.font_family);
        if let Some(lines) = &self.lines {
            size += command_size::strings_size(lines);
        }
        size
    }

    pub fn points(&self) -> Vec<Position> {
        let r = self.rect;
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

    /// Only the opaque box background is painted; glyphs are rendered by the view.
    pub fn paint(&self, dest: &mut Image) {
        if self.has_content() && self.style.background_opaque {
            dest.fill_rect(self.rect, self.style.background);
        }
    }

    fn line_mut(&mut self, row: usize) -> Result<&mut String> {
        let lines = self.lines.as_mut().ok_or(EngineError::SelectionHasNoContent)?;
        let len = lines.len();
        lines
            .get_mut(row)
            .ok_or_else(|| EngineError::invalid_bounds(format!("row {row} outside of {len} lines")))
    }

    pub fn line_len(&self, row: usize) -> usize {
        self.lines.as_ref().and_then(|lines| lines.get(row)).map_or(0, |line| line.chars().count())
    }

    pub fn line_count(&self) -> usize {
        self.lines.as_ref().map_or(0, Vec::len)
    }

    pub fn insert_text(&mut self, row: usize, col: usize, text: &str) -> Result<()> {
        let line = self.line_mut(row)?;
        let idx = byte_index(line, col)?;
        line.insert_str(idx, text);
        Ok(())
    }

    /// Removes `count` characters starting at `col` and returns them.
    pub fn remove_text(&mut self, row: usize, col: usize, count: usize) -> Result<String> {
        let line = self.line_mut(row)?;
        let start = byte_index(line, col)?;
        let end = byte_index(line, col + count)?;
        Ok(line.drain(start..end).collect())
    }

    /// Moves everything right of `col` onto a new line below `row`.
    pub fn split_line(&mut self, row: usize, col: usize) -> Result<()> {
        let line = self.line_mut(row)?;
        let idx = byte_index(line, col)?;
        let rest = line.split_off(idx);
        if let Some(lines) = self.lines.as_mut() {
            lines.insert(row + 1, rest);
        }
        Ok(())
    }

    /// Appends line `row + 1` to line `row`.
    pub fn join_line(&mut self, row: usize) -> Result<()> {
        let lines = self.lines.as_mut().ok_or(EngineError::SelectionHasNoContent)?;
        if row + 1 >= lines.len() {
            return Err(EngineError::invalid_bounds(format!("no line below row {row}")));
        }
        let next = lines.remove(row + 1);
        lines[row].push_str(&next);
        Ok(())
    }
}

fn byte_index(line: &str, col: usize) -> Result<usize> {
    if col == line.chars().count() {
        return Ok(line.len());
    }
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .ok_or_else(|| EngineError::invalid_bounds(format!("column {col} outside of line")))
}
