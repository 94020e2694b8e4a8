use indicatif::{ProgressBar, ProgressStyle};
use pulse_core::DisplayCommand;
use pulse_engine::ProgressDisplay;

/// Roughly one terminal column per this many pixels of requested width.
const PIXELS_PER_COLUMN: u32 = 10;

/// Terminal progress bar driven by display commands.
pub struct TerminalDisplay {
    bar: ProgressBar,
}

impl TerminalDisplay {
    pub fn new(width: u32) -> Self {
        let bar = ProgressBar::new(0);
        let template = format!(
            "{{msg}} [{{bar:{}.cyan/blue}}] {{pos}}/{{len}} ({{elapsed_precise}})",
            bar_columns(width)
        );
        if let Ok(style) = ProgressStyle::default_bar().template(&template) {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }
}

impl ProgressDisplay for TerminalDisplay {
    fn execute(&mut self, command: DisplayCommand) {
        match command {
            DisplayCommand::SetRange { max, .. } => self.bar.set_length(max),
            DisplayCommand::SetPosition { position } => self.bar.set_position(position),
            DisplayCommand::SetTitle { text } => self.bar.set_message(text),
            DisplayCommand::Dispose => self.bar.finish(),
        }
    }
}

fn bar_columns(width: u32) -> u32 {
    (width / PIXELS_PER_COLUMN).clamp(10, 80)
}
