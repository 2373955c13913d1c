//! # podbot
//!
//! Discord wiring for the podbot prefix-command dispatcher. The poise
//! framework owns the serenity client; every inbound message is handed to
//! the [`Dispatcher`](podbot_commands::Dispatcher) stored in the framework's
//! user data.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod handler;
pub mod panic;

pub use bot::*;
pub use error::*;
