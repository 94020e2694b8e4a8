use crate::ProgressView;

/// Toolkit-neutral instructions for a progress indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCommand {
    SetRange { min: u64, max: u64 },
    SetPosition { position: u64 },
    SetTitle { text: String },
    Dispose,
}

/// Commands that bring an indicator in line with `view`.
///
/// A disposed view renders nothing; disposal is carried by `Effect::Dispose`.
pub fn render(view: &ProgressView) -> Vec<DisplayCommand> {
    if view.disposed {
        return Vec::new();
    }

    vec![
        DisplayCommand::SetRange {
            min: 0,
            max: view.max,
        },
        DisplayCommand::SetPosition {
            position: view.value.min(view.max),
        },
        DisplayCommand::SetTitle {
            text: view.title_line.clone(),
        },
    ]
}
