use crate::{DisplayState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DisplayState, msg: Msg) -> (DisplayState, Vec<Effect>) {
    let effects = match msg {
        Msg::Progress { completed } => {
            // Stale counts and anything after dispose leave the indicator alone.
            state.apply_progress(completed);
            Vec::new()
        }
        Msg::Closed => {
            if state.dispose() {
                vec![Effect::Dispose]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}
