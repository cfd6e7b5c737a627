use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the todo list widget according to state.
///
pub fn list(frame: &mut Frame, size: Rect, state: &State) {
    let filtered = state.filtered_todos();
    let items: Vec<ListItem> = filtered
        .iter()
        .map(|todo| {
            let (marker, style) = if todo.completed {
                ("[x] ", styling::completed_todo_style())
            } else {
                ("[ ] ", styling::normal_text_style())
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, styling::muted_text_style()),
                Span::styled(todo.title.clone(), style),
            ]))
        })
        .collect();

    let title = format!(
        "Todos - {} ({} of {})",
        state.status_filter().label(),
        filtered.len(),
        state.todos().len()
    );
    let widget = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style()),
    );
    frame.render_widget(widget, size);
}
