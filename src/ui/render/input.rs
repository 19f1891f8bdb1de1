use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

const INPUT_TITLE: &str = "Número de lecciones";
const BUTTON_LABEL: &str = "Generar";
const LOADING_LABEL: &str = "Generando...";

/// Render lesson input, trigger button and loading indicator.
///
pub fn input(frame: &mut Frame, size: Rect, state: &State) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(13),
            Constraint::Length(18),
        ])
        .split(size);

    let mut block = Block::default()
        .title(INPUT_TITLE)
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style());
    if *state.current_focus() == Focus::Input {
        block = block
            .border_style(styling::active_block_border_style())
            .title(Span::styled(INPUT_TITLE, styling::active_block_title_style()));
    }
    let input = Paragraph::new(format!("{}▏", state.get_lessons_input()))
        .style(styling::normal_text_style())
        .block(block);
    frame.render_widget(input, columns[0]);

    let button = Paragraph::new(Span::styled(
        BUTTON_LABEL,
        styling::button_style(state.is_trigger_enabled()),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, columns[1]);

    if state.is_loading() {
        let loading =
            spinner::widget(state, LOADING_LABEL).block(Block::default().borders(Borders::ALL));
        frame.render_widget(loading, columns[2]);
    }
}
