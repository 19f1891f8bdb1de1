use super::Frame;
use crate::state::{Focus, ResultBlock, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const BLOCK_TITLE: &str = "Ejercicios";

/// Render result blocks according to state.
///
pub fn results(frame: &mut Frame, size: Rect, state: &State) {
    let mut block = Block::default()
        .title(BLOCK_TITLE)
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style());
    if *state.current_focus() == Focus::Results {
        block = block
            .border_style(styling::active_block_border_style())
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));
    }

    let lines: Vec<Line> = state.get_results().iter().flat_map(block_lines).collect();
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.get_results_scroll(), 0));
    frame.render_widget(paragraph, size);
}

fn block_lines(block: &ResultBlock) -> Vec<Line<'static>> {
    match block {
        ResultBlock::Heading(text) => vec![
            Line::from(Span::styled(text.clone(), styling::heading_style())),
            Line::default(),
        ],
        ResultBlock::Placeholder(text) => {
            vec![Line::from(Span::styled(text.clone(), styling::muted_text_style()))]
        }
        ResultBlock::Card(card) => {
            let mut lines = vec![
                Line::from(Span::styled(card.label.clone(), styling::card_label_style())),
                Line::from(Span::styled(card.question.clone(), styling::normal_text_style())),
            ];
            lines.extend(card.options.iter().map(|option| {
                Line::from(Span::styled(
                    format!("  • {}", option),
                    styling::normal_text_style(),
                ))
            }));
            lines.push(Line::from(Span::styled(
                card.answer_line.clone(),
                styling::answer_style(),
            )));
            lines.push(Line::default());
            lines
        }
    }
}
