use super::Frame;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};
use tui_logger::TuiLoggerWidget;

/// Render log widget.
///
pub fn log(frame: &mut Frame, size: Rect) {
    let widget = TuiLoggerWidget::default()
        .style(styling::normal_text_style())
        .block(
            Block::default()
                .title("Log (Ctrl-L: hide)")
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style()),
        );
    frame.render_widget(widget, size);
}
