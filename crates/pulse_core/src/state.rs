use crate::view_model::ProgressView;
use crate::SessionConfig;

/// What the display thread knows about a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    config: SessionConfig,
    completed: u64,
    disposed: bool,
    dirty: bool,
}

impl DisplayState {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            config: config.clone(),
            completed: 0,
            disposed: false,
            dirty: false,
        }
    }

    pub fn view(&self) -> ProgressView {
        let percent = self.config.percent_for(self.completed);
        ProgressView {
            title: self.config.title.clone(),
            title_line: format!("{}{}% completed.", self.config.title, percent),
            value: self.config.value_for(self.completed),
            max: self.config.total_steps,
            percent,
            width: self.config.width,
            height: self.config.height,
            disposed: self.disposed,
        }
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn apply_progress(&mut self, completed: u64) -> bool {
        if self.disposed || completed <= self.completed {
            return false;
        }
        self.completed = completed;
        self.dirty = true;
        true
    }

    pub(crate) fn dispose(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        self.disposed = true;
        self.dirty = true;
        true
    }
}
