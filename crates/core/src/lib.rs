//! Core game logic - pure, deterministic, and testable
//!
//! This crate is the rules engine of the falling-block game. It has no
//! dependencies on terminals, input devices or clocks: a front end feeds it
//! player actions and gravity ticks and reads back snapshots to draw.
//!
//! # Module Structure
//!
//! - [`grid`]: 10x22 field, coordinate transforms, merge and compaction
//! - [`catalog`]: the seven shapes with precomputed rotation tables
//! - [`placement`]: collision checks, movement and kicked rotation
//! - [`lines`]: full-row scan and line clearing
//! - [`speed`]: gravity interval from cleared lines
//! - [`rng`]: injectable shape source and a seeded LCG
//! - [`timer`]: tick tokens and a single-slot scheduler
//! - [`session`]: the game loop state machine
//! - [`snapshot`]: render layers handed to the front end
//!
//! # Rules
//!
//! - Pieces spawn with their pivot at (4, 20), inside two hidden rows.
//! - Moves are accepted only when every block lands inside the field on an
//!   empty cell; rejected moves change nothing.
//! - Rotation tries a fixed kick list: upward nudges for odd rotation states,
//!   sideways nudges for even ones.
//! - A gravity tick that cannot move the piece down locks it, clears full rows
//!   and spawns the next piece.
//! - If the new piece does not fit, the field and line counter reset and play
//!   continues with a fresh game.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Session, TickOutcome};
//! use blockfall_types::GameAction;
//!
//! let mut session = Session::new(12345);
//! let request = session.start();
//! assert_eq!(request.delay_ms, 800);
//!
//! session.apply_action(GameAction::MoveLeft);
//! session.apply_action(GameAction::RotateCw);
//!
//! // The front end calls back after `delay_ms`.
//! assert_eq!(session.on_tick(request.token), TickOutcome::Fell);
//! // A second delivery of the same tick is ignored.
//! assert_eq!(session.on_tick(request.token), TickOutcome::Stale);
//! ```

pub mod catalog;
pub mod grid;
pub mod lines;
pub mod placement;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod speed;
pub mod timer;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use catalog::{ActivePiece, Catalog, Shape};
pub use grid::{in_bounds, to_index, translate, Field};
pub use lines::{clear_lines, compact, count_cleared, scan_full_rows};
pub use placement::{can_place, merge, try_rotate, try_translate};
pub use rng::{ShapeSource, SimpleRng};
pub use session::{LockEvent, Phase, Session, TickOutcome};
pub use snapshot::{RenderSink, Snapshot};
pub use speed::fall_interval_ms;
pub use timer::{TickRequest, TickScheduler, TickToken};
