//! User-facing failure notices and their auto-dismiss deadline.

use std::fmt;
use std::time::{Duration, Instant};

/// Specify how long a notice stays visible before auto-dismissal.
///
pub const DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// Specify the user-facing failure classifications.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    LoadFailed,
    AddFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LoadFailed => write!(f, "Unable to load todos"),
            Notice::AddFailed => write!(f, "Unable to add a todo"),
        }
    }
}

/// Tracks the active notice and its auto-dismiss deadline.
///
/// Showing a notice arms a fresh single-shot deadline and discards the
/// previous one, so a superseded deadline can never clear a newer notice
/// prematurely. At most one notice is active at a time.
///
#[derive(Debug, Default)]
pub struct NoticeState {
    current: Option<Notice>,
    deadline: Option<Instant>,
}

impl NoticeState {
    /// Show a notice, arming its dismissal deadline relative to the given
    /// instant.
    ///
    pub fn show_at(&mut self, notice: Notice, now: Instant) {
        self.current = Some(notice);
        self.deadline = Some(now + DISPLAY_DURATION);
    }

    /// Show a notice, arming its dismissal deadline relative to now.
    ///
    pub fn show(&mut self, notice: Notice) {
        self.show_at(notice, Instant::now());
    }

    /// Dismiss the active notice and disarm its deadline.
    ///
    pub fn dismiss(&mut self) {
        self.current = None;
        self.deadline = None;
    }

    /// Clear the notice once its deadline has passed, judged against the
    /// given instant. Returns true if the notice was cleared.
    ///
    pub fn tick_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.dismiss();
                true
            }
            _ => false,
        }
    }

    /// Clear the notice once its deadline has passed. Returns true if the
    /// notice was cleared.
    ///
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Return the active notice, if any.
    ///
    pub fn current(&self) -> Option<Notice> {
        self.current
    }
}
