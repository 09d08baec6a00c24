//! Countdown state structure and display formatting

use super::modes::ModeId;

/// Snapshot of the single active countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    pub mode: ModeId,
    /// Duration of the current mode, resynced on every switch and reset
    pub initial_seconds: u32,
    pub remaining_seconds: u32,
    pub is_running: bool,
}

impl CountdownState {
    /// Fresh stopped countdown for a mode
    pub fn new(mode: ModeId) -> Self {
        let duration = mode.mode().duration_secs;
        Self {
            mode,
            initial_seconds: duration,
            remaining_seconds: duration,
            is_running: false,
        }
    }

    /// Remaining time as `MM:SS`
    pub fn display_text(&self) -> String {
        format_clock(self.remaining_seconds)
    }

    /// Window title derived from the readout
    pub fn window_title(&self) -> String {
        window_title(&self.display_text())
    }

    /// Remaining over initial duration, in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.initial_seconds == 0 {
            return 0.0;
        }
        f64::from(self.remaining_seconds) / f64::from(self.initial_seconds)
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new(ModeId::Focus)
    }
}

/// Zero-padded `MM:SS`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// The title always reads "Focus", whichever mode is active
pub fn window_title(display_text: &str) -> String {
    format!("{} - Focus", display_text)
}
