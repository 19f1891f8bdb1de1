use super::styling;
use crate::state::State;
use ratatui::{text::Span, widgets::Paragraph};

pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return the loading indicator for the current spinner frame.
///
pub fn widget<'a>(state: &State, label: &'a str) -> Paragraph<'a> {
    let frame = FRAMES[*state.get_spinner_index() % FRAMES.len()];
    Paragraph::new(Span::styled(
        format!("{} {}", frame, label),
        styling::loading_style(),
    ))
}
