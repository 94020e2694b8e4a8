use pulse_core::{update, DisplayState, Msg, SessionConfig};

#[test]
fn repeated_progress_is_noop() {
    let config = SessionConfig::new("t", 3, 1);
    let (state, _) = update(DisplayState::new(&config), Msg::Progress { completed: 1 });
    let (next, effects) = update(state.clone(), Msg::Progress { completed: 1 });

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
