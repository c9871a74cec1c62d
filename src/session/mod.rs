//! Session management module.
//!
//! This module provides the menu state machine, the per-run session
//! value, and the controller that drives one interactive run.

mod controller;
mod session;
mod state;

pub use controller::SessionController;
pub use session::Session;
pub use state::MenuState;
