//! Presentation boundary between the countdown core and its host

use serde::Serialize;

use crate::state::ModeId;

/// Caption for the start/pause control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunningLabel {
    Start,
    Pause,
}

impl RunningLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunningLabel::Start => "Start",
            RunningLabel::Pause => "Pause",
        }
    }
}

/// A single output pushed by the controller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Update {
    /// Remaining time readout and the matching window title
    Time {
        display_text: String,
        window_title: String,
    },
    /// Fraction of the ring to draw, 1.0 is full
    Progress { fraction: f64 },
    Running { label: RunningLabel },
    /// Mode context changed
    Mode {
        mode: ModeId,
        label: String,
        accent_color: String,
    },
    /// The countdown reached zero on its own
    Finished { mode: ModeId },
}

/// Receives every output of the countdown controller
pub trait Presenter {
    fn present(&mut self, update: Update);
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn present(&mut self, update: Update) {
        (**self).present(update)
    }
}

impl Presenter for Vec<Update> {
    fn present(&mut self, update: Update) {
        self.push(update);
    }
}
