use thiserror::Error;

/// Default indicator width, in pixels for windowed displays.
pub const DEFAULT_WIDTH: u32 = 400;
/// Default indicator height, in pixels for windowed displays.
pub const DEFAULT_HEIGHT: u32 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("total step count must be greater than zero")]
    ZeroTotal,
    #[error("step size must be greater than zero")]
    ZeroStep,
}

/// Everything needed to open a progress session and size its indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub title: String,
    pub total_steps: u64,
    pub step_size: u64,
    pub width: u32,
    pub height: u32,
}

impl SessionConfig {
    pub fn new(title: impl Into<String>, total_steps: u64, step_size: u64) -> Self {
        Self {
            title: title.into(),
            total_steps,
            step_size,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.total_steps == 0 {
            return Err(SessionError::ZeroTotal);
        }
        if self.step_size == 0 {
            return Err(SessionError::ZeroStep);
        }
        Ok(())
    }

    /// Display value after `completed` pulses.
    pub fn value_for(&self, completed: u64) -> u64 {
        completed.saturating_mul(self.step_size)
    }

    /// Whole-number percentage after `completed` pulses, truncated toward zero.
    ///
    /// Not capped: a step size above one reports more than 100 near the end.
    pub fn percent_for(&self, completed: u64) -> u64 {
        if self.total_steps == 0 {
            return 0;
        }
        let scaled = 100u128 * u128::from(self.step_size) * u128::from(completed)
            / u128::from(self.total_steps);
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }
}
