//! TUI Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `tui_blockfall::{core,input,term,types}` and
//! owns the run-time configuration used by the binary.

pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
