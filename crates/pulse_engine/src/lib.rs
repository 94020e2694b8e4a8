//! Pulsemon engine: progress pulse server, worker client and display driver.
mod display;
mod error;
mod server;
mod settings;
mod worker;

pub use display::{run_display, ProgressDisplay};
pub use error::{PulseError, ServerError};
pub use server::ProgressServer;
pub use settings::{ServerSettings, DEFAULT_ACCEPT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT};
pub use worker::{signal_progress, try_signal_progress, PulseWorker};
