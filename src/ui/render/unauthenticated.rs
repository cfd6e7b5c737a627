use super::Frame;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

pub const BANNER: &str = "
  _              _
 | |_  ___    __| |  ___   ___
 | __|/ _ \\  / _` | / _ \\ / __|
 | |_| (_) || (_| || (_) |\\__ \\
  \\__|\\___/  \\__,_| \\___/ |___/
";

pub const CONTENT: &str = "
 No user identity is configured, so your todos cannot be loaded.

 To get started, add your user id to the configuration file:

   ~/.config/todo-tui/config.yml

     user_id: 1234

 or pass it on the command line:

   todo-tui --user-id 1234

 Then restart the application. Press Ctrl-C to exit.
";

/// Render the terminal unauthenticated view. No interaction beyond exiting
/// is offered here.
///
pub fn unauthenticated(frame: &mut Frame, size: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(10)].as_ref())
        .margin(2)
        .split(size);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Welcome")
        .border_style(styling::active_block_border_style());
    frame.render_widget(block, size);

    let banner = Text::from(BANNER);
    let banner_widget = Paragraph::new(banner).style(styling::banner_style());
    frame.render_widget(banner_widget, rows[0]);

    let content = Text::from(CONTENT);
    let content_widget = Paragraph::new(content).style(styling::normal_text_style());
    frame.render_widget(content_widget, rows[1]);
}
