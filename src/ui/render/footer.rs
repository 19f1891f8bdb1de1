use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph};

/// Render key hints for the current focus.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let hints = match state.current_focus() {
        Focus::Input => " Enter: generate  Tab: results  Backspace: delete  Esc: quit",
        Focus::Results => " Enter: generate  Tab: input  j/k: scroll  q/Esc: quit",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, styling::muted_text_style())),
        size,
    );
}
