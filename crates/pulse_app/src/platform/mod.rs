mod app;
pub mod logging;
mod terminal;

pub use app::run_app;
