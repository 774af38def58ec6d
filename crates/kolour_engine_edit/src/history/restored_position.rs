/// Distance between the current history position and the last saved state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RestoredPosition {
    /// The document matches the saved file.
    #[default]
    Clean,
    /// Positive values need that many redos, negative values that many undos.
    /// Never zero.
    StepsFromClean(i64),
    /// The saved state was dropped from the history.
    Unreachable,
}

impl RestoredPosition {
    pub fn from_steps(steps: i64) -> Self {
        if steps == 0 {
            RestoredPosition::Clean
        } else {
            RestoredPosition::StepsFromClean(steps)
        }
    }

    pub fn steps(self) -> Option<i64> {
        match self {
            RestoredPosition::Clean => Some(0),
            RestoredPosition::StepsFromClean(steps) => Some(steps),
            RestoredPosition::Unreachable => None,
        }
    }

    pub fn is_clean(self) -> bool {
        self == RestoredPosition::Clean
    }

    /// A new command was added and the redo list dropped.
    pub(crate) fn after_add(self) -> Self {
        match self {
            RestoredPosition::StepsFromClean(steps) if steps > 0 => RestoredPosition::Unreachable,
            RestoredPosition::Unreachable => RestoredPosition::Unreachable,
            other => Self::from_steps(other.steps().unwrap_or_default() - 1),
        }
    }

    pub(crate) fn after_undo(self) -> Self {
        self.shifted(1)
    }

    pub(crate) fn after_redo(self) -> Self {
        self.shifted(-1)
    }

    fn shifted(self, delta: i64) -> Self {
        match self.steps() {
            Some(steps) => Self::from_steps(steps + delta),
            None => RestoredPosition::Unreachable,
        }
    }

    /// Becomes unreachable once the list leading back to the saved state is
    /// shorter than the distance to it.
    pub(crate) fn after_trim(self, undo_len: usize, redo_len: usize) -> Self {
        match self {
            RestoredPosition::StepsFromClean(steps) if steps > 0 && steps.unsigned_abs() > redo_len as u64 => RestoredPosition::Unreachable,
            RestoredPosition::StepsFromClean(steps) if steps < 0 && steps.unsigned_abs() > undo_len as u64 => RestoredPosition::Unreachable,
            other => other,
        }
    }
}
