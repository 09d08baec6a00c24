//! Background tasks module
//! 
//! This module contains the countdown event loop and the stdin reader that
//! feeds it.

pub mod countdown_task;
pub mod stdin_reader;

// Re-export main functions
pub use countdown_task::countdown_task;
pub use stdin_reader::spawn_stdin_reader;
