//! Frame-by-frame replay of a sketch.
//!
//! A sketch without `NextFrame` markers is a single static image. With
//! markers, each call to [`play_frame`] draws one more frame, resuming at
//! the byte after the marker that ended the previous pass.
//!
//! ```text
//!            play_frame()
//!   Idle ─────────────────► Replaying
//!    ▲                          │
//!    └──── NextFrame / end ─────┘
//! ```

use crate::canvas::Canvas;
use crate::codec::{Instruction, ToolOp};
use crate::execute::apply;
use crate::state::DrawingState;

/// Replay one frame of `bytes` onto `canvas`.
///
/// Starts at `state.resume_offset` and runs until a `NextFrame`
/// instruction or the end of the stream. On a frame boundary at index `i`
/// the resume offset becomes `i + 1`; at the end of the stream it becomes
/// `bytes.len()`, so later calls replay nothing until the state is rewound.
///
/// After the pass the cursor, target and tool are reset and
/// [`Canvas::show`] is called once. The accumulator is carried over.
///
/// Returns `true` if the pass stopped at a frame boundary and `false` if
/// the stream was exhausted.
pub fn play_frame<C: Canvas + ?Sized>(
    bytes: &[u8],
    state: &mut DrawingState,
    canvas: &mut C,
) -> bool {
    let start = state.resume_offset.min(bytes.len());
    let mut boundary = false;

    for (i, &byte) in bytes.iter().enumerate().skip(start) {
        apply(state, canvas, byte);
        if state.frame_boundary_hit {
            state.resume_offset = i + 1;
            state.frame_boundary_hit = false;
            boundary = true;
            break;
        }
    }

    if !boundary {
        state.resume_offset = bytes.len();
    }

    if state.accumulator != 0 {
        log::debug!(
            "accumulator {} left pending at offset {}",
            state.accumulator,
            state.resume_offset
        );
    }

    canvas.show();
    state.reset_pass();
    boundary
}

/// Whether every byte of `bytes` has been replayed.
pub fn is_finished(bytes: &[u8], state: &DrawingState) -> bool {
    state.resume_offset >= bytes.len()
}

/// Number of frames in `bytes`: one more than the number of frame markers.
pub fn frame_count(bytes: &[u8]) -> usize {
    1 + bytes
        .iter()
        .filter(|&&b| Instruction::decode(b).tool_op() == Some(ToolOp::NextFrame))
        .count()
}
