//! State management module
//! 
//! This module contains the mode presets, the countdown state and the
//! controller that drives it.

pub mod modes;
pub mod countdown_state;
pub mod controller;

// Re-export main types
pub use modes::{Mode, ModeId};
pub use countdown_state::CountdownState;
pub use controller::{CountdownController, TimerEvent, AUTO_RESET_DELAY, TICK_PERIOD};
