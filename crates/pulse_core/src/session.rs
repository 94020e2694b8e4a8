use crate::SessionConfig;

/// Result of recording one progress pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseOutcome {
    /// The pulse was counted; more are expected.
    Counted { completed: u64 },
    /// The pulse was the last of `total_steps`.
    Completed { completed: u64 },
    /// The session was already closed or complete.
    Ignored,
}

/// Counter state of one progress session.
///
/// The counter only moves forward, never past `total_steps`, and stops
/// moving once the session is closed. The display shows
/// `completed × step_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSession {
    config: SessionConfig,
    completed: u64,
    port: Option<u16>,
    closed: bool,
}

impl ProgressSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            completed: 0,
            port: None,
            closed: false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = Some(port);
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// True once `total_steps` pulses have been counted.
    pub fn is_complete(&self) -> bool {
        self.completed >= self.config.total_steps
    }

    pub fn display_value(&self) -> u64 {
        self.config.value_for(self.completed)
    }

    pub fn percent(&self) -> u64 {
        self.config.percent_for(self.completed)
    }

    pub fn record_pulse(&mut self) -> PulseOutcome {
        if self.closed || self.is_complete() {
            return PulseOutcome::Ignored;
        }
        self.completed += 1;
        if self.is_complete() {
            PulseOutcome::Completed {
                completed: self.completed,
            }
        } else {
            PulseOutcome::Counted {
                completed: self.completed,
            }
        }
    }

    /// Marks the session closed. Returns `true` only for the call that closed it.
    pub fn close(&mut self) -> bool {
        !std::mem::replace(&mut self.closed, true)
    }
}
