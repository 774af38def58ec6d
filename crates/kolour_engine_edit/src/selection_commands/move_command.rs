use kolour_engine::{command_size, command_size::SizeType, Document, EngineError, Image, Position, Rectangle, Result};

use crate::{Command, CommandContext, CommandType};

/// Moves the selection and records the stamps of a smear drag.
///
/// While the tool drags it calls [`move_to`](Self::move_to) and
/// [`copy_onto_document`](Self::copy_onto_document) on the live document,
/// then [`finalize`](Self::finalize)s the command and adds it to the history
/// without executing it.
pub struct SelectionMoveCommand {
    name: String,
    start_point: Position,
    end_point: Position,
    old_document_image: Option<Image>,
    old_document_origin: Position,
    copy_onto_document_points: Vec<Position>,
    document_rect: Rectangle,
    finalized: bool,
}

impl SelectionMoveCommand {
    pub fn new(name: impl Into<String>, document: &Document) -> Result<Self> {
        let start_point = document.selection().ok_or(EngineError::NoSelection)?.top_left();
        Ok(Self {
            name: name.into(),
            start_point,
            end_point: start_point,
            old_document_image: None,
            old_document_origin: Position::default(),
            copy_onto_document_points: Vec::new(),
            document_rect: Rectangle::default(),
            finalized: false,
        })
    }

    pub fn start_point(&self) -> Position {
        self.start_point
    }

    pub fn end_point(&self) -> Position {
        self.end_point
    }

    /// Union of every stamped area.
    pub fn affected_rect(&self) -> Rectangle {
        self.document_rect
    }

    pub fn copy_onto_document_points(&self) -> &[Position] {
        &self.copy_onto_document_points
    }

    /// Records `point` as the destination; with `move_later` the selection
    /// itself stays where it is.
    pub fn move_to(&mut self, point: Position, move_later: bool, ctx: &mut CommandContext<'_>) -> Result<()> {
        if !move_later {
            move_selection(ctx, point)?;
        }
        self.end_point = point;
        Ok(())
    }

    /// Stamps the selection content onto the document where it currently is.
    pub fn copy_onto_document(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        if self.finalized {
            return Err(EngineError::invariant("stamp recorded after finalize"));
        }
        let selection = ctx.document.selection().ok_or(EngineError::NoSelection)?;
        if !selection.has_content() {
            return Err(EngineError::SelectionHasNoContent);
        }
        let top_left = selection.top_left();

        if self.old_document_image.is_none() {
            self.old_document_image = Some(ctx.document.image().clone());
            self.old_document_origin = Position::default();
        }

        let rect = ctx.document.selection_copy_onto_document(true)?;
        self.document_rect = self.document_rect.union(&rect);
        self.copy_onto_document_points.push(top_left);
        ctx.update_region(rect);
        Ok(())
    }

    /// Shrinks the undo snapshot to the stamped area. Call once, before the
    /// command goes into the history.
    pub fn finalize(&mut self) {
        if self.finalized {
            log::warn!("'{}' finalized twice", self.name);
            return;
        }
        self.finalized = true;
        if let Some(image) = self.old_document_image.take() {
            let crop = self.document_rect.intersect(&image.rect());
            self.old_document_image = Some(image.copy(crop));
            self.old_document_origin = crop.top_left();
        }
    }
}

fn move_selection(ctx: &mut CommandContext<'_>, point: Position) -> Result<()> {
    let selection = ctx.document.selection().ok_or(EngineError::NoSelection)?;
    if selection.top_left() == point {
        return Ok(());
    }
    ctx.update_selection_region();
    if let Some(selection) = ctx.document.selection_mut() {
        selection.move_to(point);
    }
    ctx.update_selection_region();
    ctx.environment.notify_something_below_cursor_changed();
    Ok(())
}

impl Command for SelectionMoveCommand {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> SizeType {
        command_size::optional_image_size(self.old_document_image.as_ref()) + command_size::polygon_size(&self.copy_onto_document_points)
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        ctx.with_queued_updates(|ctx| {
            for point in &self.copy_onto_document_points {
                move_selection(ctx, *point)?;
                let rect = ctx.document.selection_copy_onto_document(true)?;
                ctx.update_region(rect);
            }
            move_selection(ctx, self.end_point)
        })
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        ctx.with_queued_updates(|ctx| {
            if let Some(image) = &self.old_document_image {
                ctx.document.set_image_at(image, self.old_document_origin);
                ctx.update_region(image.rect().moved_to(self.old_document_origin));
            }
            move_selection(ctx, self.start_point)
        })
    }

    fn command_type(&self) -> CommandType {
        CommandType::MoveSelection
    }
}
