use super::*;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::Span,
    widgets::Paragraph,
};

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Lesson input and trigger
            Constraint::Min(6),    // Results
            Constraint::Length(1), // Error line
            Constraint::Length(8), // Log
            Constraint::Length(1), // Footer
        ])
        .split(frame.size());

    header(frame, rows[0], state);
    input(frame, rows[1], state);
    results(frame, rows[2], state);

    let error = Paragraph::new(Span::styled(
        state.get_error().to_owned(),
        styling::error_style(),
    ));
    frame.render_widget(error, rows[3]);

    log(frame, rows[4], state);
    footer(frame, rows[5], state);
}
