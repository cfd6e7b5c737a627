use super::Frame;
use crate::state::{State, StatusFilter};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the counter, filter links, and clear-completed control according
/// to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let active = state.active_count();
    let counter = format!("{} item{} left", active, if active == 1 { "" } else { "s" });

    let mut spans = vec![
        Span::styled(counter, styling::normal_text_style()),
        Span::raw("  |  "),
    ];
    for filter in StatusFilter::ORDER {
        let style = if filter == state.status_filter() {
            styling::selected_filter_style()
        } else {
            styling::muted_text_style()
        };
        spans.push(Span::styled(filter.label(), style));
        spans.push(Span::raw("  "));
    }

    // The clear-completed control is a stub: its enabled appearance follows
    // the list, but no action is wired to it.
    spans.push(Span::raw("|  "));
    let clear_style = if state.has_completed() {
        styling::normal_text_style()
    } else {
        styling::muted_text_style()
    };
    spans.push(Span::styled("Clear completed", clear_style));

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Tab: filter")
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style()),
    );
    frame.render_widget(widget, size);
}
