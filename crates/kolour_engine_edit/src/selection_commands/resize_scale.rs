use std::sync::Arc;

use i18n_embed_fl::fl;
use kolour_engine::{command_size::SizeType, Document, EngineError, Position, Rectangle, Result, Selection};

use super::{install_selection, Clock, SmoothScaleTimer, SystemClock};
use crate::{Command, CommandContext, CommandType};

/// Resizes a text box or scales an image selection.
///
/// Image content is scaled fast while the user drags (`delayed`) and rescaled
/// smoothly once the drag has been idle for the timer interval. The event
/// loop polls [`fire_smooth_scale_if_due`](Self::fire_smooth_scale_if_due);
/// [`finalize`](Self::finalize) runs a pending rescale right away.
pub struct SelectionResizeScaleCommand {
    original_selection: Selection,
    new_top_left: Position,
    new_width: i32,
    new_height: i32,
    smooth_scale_timer: SmoothScaleTimer,
}

impl SelectionResizeScaleCommand {
    pub fn new(document: &Document) -> Result<Self> {
        Self::with_clock(document, Arc::new(SystemClock))
    }

    pub fn with_clock(document: &Document, clock: Arc<dyn Clock>) -> Result<Self> {
        let original_selection = document.selection().ok_or(EngineError::NoSelection)?.clone();
        let rect = original_selection.bounding_rect();
        Ok(Self {
            original_selection,
            new_top_left: rect.top_left(),
            new_width: rect.width(),
            new_height: rect.height(),
            smooth_scale_timer: SmoothScaleTimer::new(clock),
        })
    }

    pub fn original_selection(&self) -> &Selection {
        &self.original_selection
    }

    pub fn new_top_left(&self) -> Position {
        self.new_top_left
    }

    pub fn new_width(&self) -> i32 {
        self.new_width
    }

    pub fn new_height(&self) -> i32 {
        self.new_height
    }

    pub fn smooth_scale_pending(&self) -> bool {
        self.smooth_scale_timer.is_active()
    }

    pub fn resize(&mut self, width: i32, height: i32, delayed: bool, ctx: &mut CommandContext<'_>) -> Result<()> {
        if self.new_width == width && self.new_height == height {
            return Ok(());
        }
        self.new_width = width;
        self.new_height = height;
        self.resize_scale_and_move(delayed, ctx)
    }

    pub fn resize_and_move_to(&mut self, width: i32, height: i32, point: Position, delayed: bool, ctx: &mut CommandContext<'_>) -> Result<()> {
        if self.new_width == width && self.new_height == height && self.new_top_left == point {
            return Ok(());
        }
        self.new_width = width;
        self.new_height = height;
        self.new_top_left = point;
        self.resize_scale_and_move(delayed, ctx)
    }

    pub fn kill_smooth_scale_timer(&mut self) {
        self.smooth_scale_timer.kill();
    }

    /// Runs the smooth rescale if the timer has expired. Returns whether it ran.
    pub fn fire_smooth_scale_if_due(&mut self, ctx: &mut CommandContext<'_>) -> Result<bool> {
        if !self.smooth_scale_timer.is_due() {
            return Ok(false);
        }
        log::debug!("smooth scale to {}x{}", self.new_width, self.new_height);
        self.resize_scale_and_move(false, ctx)?;
        Ok(true)
    }

    /// Runs a pending smooth rescale now.
    pub fn finalize(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        if self.smooth_scale_timer.is_active() {
            self.resize_scale_and_move(false, ctx)?;
        }
        Ok(())
    }

    fn resize_scale_and_move(&mut self, delayed: bool, ctx: &mut CommandContext<'_>) -> Result<()> {
        self.kill_smooth_scale_timer();

        let width = self.new_width.max(self.original_selection.minimum_width());
        let height = self.new_height.max(self.original_selection.minimum_height());
        let new_selection = match &self.original_selection {
            Selection::Text(sel) => {
                let mut resized = sel.resized(width, height);
                resized.move_to(self.new_top_left);
                Selection::Text(resized)
            }
            Selection::Image(sel) => {
                let rect = Rectangle::from_min_size(self.new_top_left, (width, height));
                Selection::Image(sel.scaled_to(rect, !delayed)?)
            }
        };

        if delayed {
            self.smooth_scale_timer.start();
        }

        install_selection(ctx, new_selection)
    }
}

impl Command for SelectionResizeScaleCommand {
    fn name(&self) -> String {
        if self.original_selection.is_text() {
            fl!(crate::LANGUAGE_LOADER, "command-text-resize")
        } else if self.original_selection.has_content() {
            fl!(crate::LANGUAGE_LOADER, "command-selection-smooth-scale")
        } else {
            fl!(crate::LANGUAGE_LOADER, "command-selection-resize-scale")
        }
    }

    fn size(&self) -> SizeType {
        self.original_selection.size()
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        self.kill_smooth_scale_timer();
        self.resize_scale_and_move(false, ctx)?;
        ctx.environment.notify_something_below_cursor_changed();
        Ok(())
    }

    fn unexecute(&mut self, ctx: &mut CommandContext<'_>) -> Result<()> {
        self.kill_smooth_scale_timer();
        install_selection(ctx, self.original_selection.clone())?;
        ctx.environment.notify_something_below_cursor_changed();
        Ok(())
    }

    fn command_type(&self) -> CommandType {
        CommandType::ResizeScaleSelection
    }
}
