use kolour_engine::Rectangle;

/// Repaint sink of the view layer.
///
/// Queueing only batches repaints, it never changes document state.
pub trait ViewManager {
    fn set_queue_updates(&mut self);

    fn restore_queue_updates(&mut self);

    fn queue_updates(&self) -> bool;

    fn update_region(&mut self, rect: Rectangle);
}

/// Collects dirty regions and counts the repaints it would issue.
#[derive(Debug, Default, Clone)]
pub struct ViewUpdateQueue {
    queue_depth: usize,
    dirty: Rectangle,
    repaint_count: usize,
    last_repaint: Option<Rectangle>,
}

impl ViewUpdateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repaint_count(&self) -> usize {
        self.repaint_count
    }

    pub fn last_repaint(&self) -> Option<Rectangle> {
        self.last_repaint
    }

    fn repaint(&mut self, rect: Rectangle) {
        self.repaint_count += 1;
        self.last_repaint = Some(rect);
    }
}

impl ViewManager for ViewUpdateQueue {
    fn set_queue_updates(&mut self) {
        self.queue_depth += 1;
    }

    fn restore_queue_updates(&mut self) {
        if self.queue_depth == 0 {
            log::warn!("restore_queue_updates called without matching set_queue_updates");
            return;
        }
        self.queue_depth -= 1;
        if self.queue_depth == 0 && !self.dirty.is_empty() {
            let dirty = std::mem::take(&mut self.dirty);
            self.repaint(dirty);
        }
    }

    fn queue_updates(&self) -> bool {
        self.queue_depth > 0
    }

    fn update_region(&mut self, rect: Rectangle) {
        if rect.is_empty() {
            return;
        }
        if self.queue_updates() {
            self.dirty = self.dirty.union(&rect);
        } else {
            self.repaint(rect);
        }
    }
}
