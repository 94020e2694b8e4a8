use pretty_assertions::assert_eq;
use pulse_core::{render, update, DisplayCommand, DisplayState, Msg, SessionConfig};

#[test]
fn renders_range_position_and_title() {
    let config = SessionConfig::new("Job ", 8, 2);
    let (state, _) = update(DisplayState::new(&config), Msg::Progress { completed: 3 });

    assert_eq!(
        render(&state.view()),
        vec![
            DisplayCommand::SetRange { min: 0, max: 8 },
            DisplayCommand::SetPosition { position: 6 },
            DisplayCommand::SetTitle {
                text: "Job 75% completed.".to_string(),
            },
        ]
    );
}

#[test]
fn position_is_clamped_to_max() {
    let config = SessionConfig::new("Job ", 10, 4);
    let (state, _) = update(DisplayState::new(&config), Msg::Progress { completed: 3 });

    let commands = render(&state.view());
    assert!(commands.contains(&DisplayCommand::SetPosition { position: 10 }));
    assert!(commands.contains(&DisplayCommand::SetTitle {
        text: "Job 120% completed.".to_string(),
    }));
}

#[test]
fn disposed_view_renders_nothing() {
    let config = SessionConfig::new("Job ", 10, 1);
    let (state, _) = update(DisplayState::new(&config), Msg::Closed);

    assert!(render(&state.view()).is_empty());
}
