use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Render the dismissible notice banner according to state.
///
pub fn notice(frame: &mut Frame, size: Rect, state: &State) {
    let active = match state.notice() {
        Some(notice) => notice,
        None => return,
    };

    let widget = Paragraph::new(active.to_string())
        .style(styling::notice_style())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Error (Esc: dismiss)")
                .borders(Borders::ALL)
                .border_style(styling::notice_style()),
        );
    frame.render_widget(widget, size);
}
