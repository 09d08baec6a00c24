//! Countdown controller: the focus timer state machine

use std::{future::pending, pin::Pin, time::Duration};
use tokio::time::{interval_at, sleep, Instant, Interval, MissedTickBehavior, Sleep};
use tracing::{debug, info};

use super::{
    countdown_state::CountdownState,
    modes::{Mode, ModeId},
};
use crate::{
    api::presenter::{Presenter, RunningLabel, Update},
    error::InvalidModeError,
};

/// Interval between two ticks while running
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
/// Delay between finishing and the automatic reset
pub const AUTO_RESET_DELAY: Duration = Duration::from_secs(1);

/// Periodic tick handle, held only while running. Dropping it cancels the tick.
#[derive(Debug)]
struct Ticker {
    interval: Interval,
}

impl Ticker {
    fn start() -> Self {
        // First tick one full period after start; late ticks are never replayed
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

/// One-shot handle for the reset that follows a finished countdown
#[derive(Debug)]
struct AutoReset {
    sleep: Pin<Box<Sleep>>,
}

impl AutoReset {
    fn schedule() -> Self {
        Self {
            sleep: Box::pin(sleep(AUTO_RESET_DELAY)),
        }
    }

    async fn fired(&mut self) {
        self.sleep.as_mut().await;
    }
}

/// Timer-driven events the controller waits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick,
    AutoReset,
}

/// Owns the countdown state and its timer handles, and pushes every change
/// to the injected presenter.
///
/// All operations are synchronous. The owner drives time by awaiting
/// [`next_timer_event`](Self::next_timer_event) and feeding the result back
/// through [`on_timer_event`](Self::on_timer_event), which keeps ticks
/// strictly serialized with user input.
#[derive(Debug)]
pub struct CountdownController<P> {
    state: CountdownState,
    ticker: Option<Ticker>,
    pending_reset: Option<AutoReset>,
    presenter: P,
}

impl<P: Presenter> CountdownController<P> {
    /// Create a stopped focus countdown and push the initial frame
    pub fn new(presenter: P) -> Self {
        let mut controller = Self {
            state: CountdownState::default(),
            ticker: None,
            pending_reset: None,
            presenter,
        };

        controller.emit_mode();
        controller.emit_time();
        controller.emit_progress(1.0);
        controller.emit_running();
        controller
    }

    /// Switch to the mode named by `id`, discarding any progress.
    ///
    /// Unknown ids leave the state untouched.
    pub fn switch_mode(&mut self, id: &str) -> Result<(), InvalidModeError> {
        let mode: ModeId = id.parse()?;
        self.select_mode(mode);
        Ok(())
    }

    /// Typed variant of [`switch_mode`](Self::switch_mode)
    pub fn select_mode(&mut self, mode: ModeId) {
        if mode == self.state.mode {
            debug!("Already in {} mode, ignoring switch", mode);
            return;
        }

        self.cancel_auto_reset();
        self.stop();

        let preset = mode.mode();
        self.state.mode = mode;
        self.state.initial_seconds = preset.duration_secs;
        self.state.remaining_seconds = preset.duration_secs;
        info!("Switched to {} mode ({}s)", mode, preset.duration_secs);

        self.emit_mode();
        self.emit_time();
        self.emit_progress(1.0);
    }

    /// Start when stopped, pause when running.
    ///
    /// Starting inside the window after a finish restores the full duration
    /// first instead of waiting for the automatic reset.
    pub fn toggle(&mut self) {
        if self.pending_reset.take().is_some() {
            debug!("Toggle during auto-reset window, restoring first");
            self.restore();
            self.start();
            return;
        }

        if self.state.is_running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Begin ticking. No-op while already running.
    pub fn start(&mut self) {
        if self.state.is_running {
            return;
        }

        self.ticker = Some(Ticker::start());
        self.state.is_running = true;
        info!(
            "Countdown started in {} mode with {} remaining",
            self.state.mode,
            self.state.display_text()
        );
        self.emit_running();
    }

    /// Stop ticking. No-op while already stopped.
    pub fn stop(&mut self) {
        if !self.state.is_running {
            return;
        }

        self.ticker = None;
        self.state.is_running = false;
        info!("Countdown paused at {}", self.state.display_text());
        self.emit_running();
    }

    /// Stop and restore the full duration of the current mode
    pub fn reset(&mut self) {
        self.cancel_auto_reset();
        self.restore();
    }

    /// Advance the countdown by exactly one second.
    ///
    /// Ignored while stopped. Reaching zero finishes the countdown and
    /// schedules the automatic reset.
    pub fn tick(&mut self) {
        if !self.state.is_running {
            debug!("Tick while stopped, ignoring");
            return;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        debug!("Tick: {} remaining", self.state.display_text());

        self.emit_time();
        self.emit_progress(self.state.progress());

        if self.state.remaining_seconds == 0 {
            self.finish();
        }
    }

    /// Wait for the next tick or the pending auto-reset, whichever is due.
    ///
    /// Pends forever while stopped with nothing scheduled. Cancel safe.
    pub async fn next_timer_event(&mut self) -> TimerEvent {
        tokio::select! {
            _ = wait_tick(&mut self.ticker) => TimerEvent::Tick,
            _ = wait_auto_reset(&mut self.pending_reset) => TimerEvent::AutoReset,
        }
    }

    /// Apply an event returned by [`next_timer_event`](Self::next_timer_event)
    pub fn on_timer_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick => self.tick(),
            TimerEvent::AutoReset => {
                if self.pending_reset.take().is_some() {
                    info!("Restoring {} countdown after finish", self.state.mode);
                    self.restore();
                }
            }
        }
    }

    pub fn snapshot(&self) -> CountdownState {
        self.state.clone()
    }

    pub fn current_mode(&self) -> &'static Mode {
        self.state.mode.mode()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn has_pending_auto_reset(&self) -> bool {
        self.pending_reset.is_some()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn finish(&mut self) {
        info!("{} countdown finished", self.current_mode().label);
        self.stop();
        self.presenter.present(Update::Finished {
            mode: self.state.mode,
        });
        self.pending_reset = Some(AutoReset::schedule());
    }

    fn restore(&mut self) {
        self.stop();
        self.state.remaining_seconds = self.state.initial_seconds;
        self.emit_time();
        self.emit_progress(1.0);
    }

    // User input during the post-finish window wins over the delayed reset
    fn cancel_auto_reset(&mut self) {
        if self.pending_reset.take().is_some() {
            debug!("Cancelled pending auto-reset");
        }
    }

    fn emit_time(&mut self) {
        self.presenter.present(Update::Time {
            display_text: self.state.display_text(),
            window_title: self.state.window_title(),
        });
    }

    fn emit_progress(&mut self, fraction: f64) {
        self.presenter.present(Update::Progress { fraction });
    }

    fn emit_running(&mut self) {
        let label = if self.state.is_running {
            RunningLabel::Pause
        } else {
            RunningLabel::Start
        };
        self.presenter.present(Update::Running { label });
    }

    fn emit_mode(&mut self) {
        let preset = self.current_mode();
        self.presenter.present(Update::Mode {
            mode: preset.id,
            label: preset.label.to_string(),
            accent_color: preset.color.to_string(),
        });
    }
}

async fn wait_tick(ticker: &mut Option<Ticker>) {
    match ticker {
        Some(ticker) => ticker.tick().await,
        None => pending().await,
    }
}

async fn wait_auto_reset(pending_reset: &mut Option<AutoReset>) {
    match pending_reset {
        Some(reset) => reset.fired().await,
        None => pending().await,
    }
}
