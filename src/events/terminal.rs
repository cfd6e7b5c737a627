use crate::state::State;
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    tx_clone.send(Event::Input(key)).unwrap();
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => match event {
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyEvent {
                    code: KeyCode::Char('l'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => {
                    state.toggle_log();
                }
                // The unauthenticated view is terminal; no further
                // interaction is attempted.
                _ if !state.is_authenticated() => {}
                KeyEvent {
                    code: KeyCode::Esc, ..
                } => {
                    state.dismiss_notice();
                }
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } => {
                    // The input is disabled while a create is in flight.
                    if !state.is_loading() {
                        debug!("Processing submit terminal event...");
                        state.submit();
                    }
                }
                KeyEvent {
                    code: KeyCode::Backspace,
                    ..
                } => {
                    if !state.is_loading() {
                        state.pop_draft_char();
                    }
                }
                KeyEvent {
                    code: KeyCode::Tab, ..
                }
                | KeyEvent {
                    code: KeyCode::Right,
                    ..
                } => {
                    let next = state.status_filter().next();
                    state.set_status_filter(next);
                }
                KeyEvent {
                    code: KeyCode::BackTab,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Left,
                    ..
                } => {
                    let prev = state.status_filter().prev();
                    state.set_status_filter(prev);
                }
                KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::NONE,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::SHIFT,
                    ..
                } => {
                    if !state.is_loading() {
                        state.push_draft_char(c);
                    }
                }
                _ => {}
            },
            Event::Tick => {
                state.tick();
            }
        }
        Ok(true)
    }
}
