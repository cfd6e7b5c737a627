use super::Frame;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

/// Render the draft input widget according to state.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let title = if state.is_loading() {
        format!("New todo {}", spinner::frame(state.spinner_index()))
    } else {
        String::from("New todo (Enter: add)")
    };

    let border_style = if state.is_loading() {
        styling::normal_block_border_style()
    } else {
        styling::active_block_border_style()
    };

    let text_style = if state.is_loading() {
        styling::muted_text_style()
    } else {
        styling::normal_text_style()
    };

    let input = Paragraph::new(state.draft().title.as_str())
        .style(text_style)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(input, size);
}
