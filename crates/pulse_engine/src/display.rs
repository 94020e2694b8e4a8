use std::sync::mpsc;

use pulse_core::{render, update, DisplayCommand, DisplayState, Effect, Msg, ProgressView};
use pulse_logging::pulse_debug;

/// A visual progress indicator owned by a single thread.
pub trait ProgressDisplay {
    fn execute(&mut self, command: DisplayCommand);
}

/// Drives `display` from messages sent by a progress server.
///
/// Must be called on the thread that owns the display. Returns once the
/// indicator has been disposed, either because the session closed or
/// because every sender went away.
pub fn run_display(
    mut state: DisplayState,
    msg_rx: mpsc::Receiver<Msg>,
    display: &mut dyn ProgressDisplay,
) -> DisplayState {
    apply_view(display, &state.view());

    while !state.is_disposed() {
        let msg = match msg_rx.recv() {
            Ok(msg) => msg,
            Err(_) => {
                pulse_debug!("Progress channel closed before session end");
                Msg::Closed
            }
        };

        let (next, effects) = update(state, msg);
        state = next;

        if state.consume_dirty() {
            apply_view(display, &state.view());
        }
        for effect in effects {
            match effect {
                Effect::Dispose => display.execute(DisplayCommand::Dispose),
            }
        }
    }

    state
}

fn apply_view(display: &mut dyn ProgressDisplay, view: &ProgressView) {
    for command in render(view) {
        display.execute(command);
    }
}
