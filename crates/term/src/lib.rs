//! Terminal front end for the falling-block game.
//!
//! Frames are drawn into a plain framebuffer and flushed to the terminal with
//! crossterm, sending only the cells that changed. Each board cell is two
//! columns wide so the 10x20 board keeps a 1:2 aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sink;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardOrigin, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::TerminalSink;
