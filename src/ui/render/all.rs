use super::*;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the full application frame according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    if !state.is_authenticated() {
        unauthenticated(frame, size);
        return;
    }

    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
    ];
    if state.notice().is_some() {
        constraints.push(Constraint::Length(3));
    }
    if state.is_log_shown() {
        constraints.push(Constraint::Length(8));
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    header(frame, rows[0], state);
    list(frame, rows[1], state);
    footer(frame, rows[2], state);

    let mut next = 3;
    if state.notice().is_some() {
        notice(frame, rows[next], state);
        next += 1;
    }
    if state.is_log_shown() {
        log(frame, rows[next]);
    }
}
