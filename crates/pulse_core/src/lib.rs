//! Pulsemon core: progress session model and the pure display state machine.
mod config;
mod effect;
mod msg;
mod render;
mod session;
mod state;
mod update;
mod view_model;

pub use config::{SessionConfig, SessionError, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use effect::Effect;
pub use msg::Msg;
pub use render::{render, DisplayCommand};
pub use session::{ProgressSession, PulseOutcome};
pub use state::DisplayState;
pub use update::update;
pub use view_model::ProgressView;
