//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. There is no
//! repeat logic here: every press (or terminal auto-repeat) is one discrete
//! action, delivered to the session in the order it was read.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
