use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const TITLE: &str = "Generador de ejercicios";

/// Render header with the backend status.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let status = state.get_backend_status().unwrap_or("checking...");
    let line = Line::from(vec![
        Span::styled(TITLE, styling::heading_style()),
        Span::styled(format!("  backend: {}", status), styling::muted_text_style()),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style());
    frame.render_widget(Paragraph::new(line).block(block), size);
}
