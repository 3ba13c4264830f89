//! # sketch-core - Sketch byte-code player
//!
//! This crate decodes the compact sketch drawing format and plays it onto
//! any drawing surface.
//!
//! ## Overview
//!
//! - **Decoding**: [`decode_opcode`] and [`decode_operand`] split a byte
//!   into its instruction class and signed operand
//! - **Executing**: [`apply`] runs one byte against a [`DrawingState`]
//! - **Playing**: [`play_frame`] replays a stream one frame at a time
//! - **Drawing**: implement [`Canvas`] for your target
//!
//! ## Sketch Format
//!
//! A sketch is a sequence of single-byte instructions:
//!
//! | Opcode | Bits 7-6 | Bits 5-0                      |
//! |--------|----------|-------------------------------|
//! | TOOL   | `00`     | tool or control selector      |
//! | DX     | `01`     | signed x delta (-32..31)      |
//! | DY     | `10`     | signed y delta, then draw     |
//! | DATA   | `11`     | accumulator chunk             |
//!
//! Wide operands (colours, pauses, absolute targets) are built by DATA
//! instructions and consumed by the following TOOL instruction.
//!
//! ## Example
//!
//! ```
//! use sketch_core::{Canvas, DrawingState, play_frame};
//!
//! struct Lines(Vec<(i32, i32, i32, i32)>);
//!
//! impl Canvas for Lines {
//!     fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
//!         self.0.push((x0, y0, x1, y1));
//!     }
//!     fn block(&mut self, _x: i32, _y: i32, _w: i32, _h: i32) {}
//!     fn set_colour(&mut self, _rgba: u32) {}
//!     fn show(&mut self) {}
//!     fn pause(&mut self, _millis: u32) {}
//! }
//!
//! // DX +30, DY +20: a line from the origin
//! let bytes = [0x5E, 0x94];
//! let mut state = DrawingState::new();
//! let mut canvas = Lines(Vec::new());
//! play_frame(&bytes, &mut state, &mut canvas);
//! assert_eq!(canvas.0, vec![(0, 0, 30, 20)]);
//! ```

pub mod canvas;
pub mod codec;
pub mod colour;
pub mod disasm;
pub mod error;
pub mod execute;
pub mod player;
pub mod sketch;
pub mod state;

pub use canvas::Canvas;
pub use codec::{Instruction, Opcode, ToolOp, decode_opcode, decode_operand, encode};
pub use colour::Colour;
pub use error::LoadError;
pub use execute::{apply, apply_instruction};
pub use player::{frame_count, is_finished, play_frame};
pub use sketch::Sketch;
pub use state::{DrawingState, Tool};
