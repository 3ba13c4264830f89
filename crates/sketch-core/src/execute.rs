//! Single-instruction executor.
//!
//! [`apply`] decodes one byte and applies it to a [`DrawingState`], calling
//! into the [`Canvas`] for anything visible. It never fails: every byte is a
//! valid instruction and unknown TOOL operands are ignored.
//!
//! Coordinate and accumulator arithmetic wraps at 32 bits.

use crate::canvas::Canvas;
use crate::codec::{DATA_BITS, Instruction, Opcode, ToolOp};
use crate::state::{DrawingState, Tool};

/// Decode `byte` and apply it to `state`.
pub fn apply<C: Canvas + ?Sized>(state: &mut DrawingState, canvas: &mut C, byte: u8) {
    apply_instruction(state, canvas, Instruction::decode(byte));
}

/// Apply an already decoded instruction to `state`.
pub fn apply_instruction<C: Canvas + ?Sized>(
    state: &mut DrawingState,
    canvas: &mut C,
    instr: Instruction,
) {
    match instr.opcode {
        Opcode::Tool => {
            match ToolOp::from_operand(instr.operand) {
                Some(op) => run_tool(state, canvas, op),
                None => log::trace!("ignoring unknown tool operand {}", instr.operand),
            }
            // The operand is consumed by every TOOL instruction
            state.accumulator = 0;
        }

        Opcode::Dx => {
            state.tx = state.tx.wrapping_add(instr.operand);
        }

        Opcode::Dy => {
            state.ty = state.ty.wrapping_add(instr.operand);
            match state.tool {
                Tool::Line => canvas.line(state.x, state.y, state.tx, state.ty),
                Tool::Block => canvas.block(
                    state.x,
                    state.y,
                    state.tx.wrapping_sub(state.x),
                    state.ty.wrapping_sub(state.y),
                ),
                Tool::None | Tool::Colour => {}
            }
            state.x = state.tx;
            state.y = state.ty;
        }

        Opcode::Data => {
            state.accumulator = (state.accumulator << DATA_BITS) | instr.chunk();
        }
    }
}

fn run_tool<C: Canvas + ?Sized>(state: &mut DrawingState, canvas: &mut C, op: ToolOp) {
    match op {
        ToolOp::None => state.tool = Tool::None,
        ToolOp::Line => state.tool = Tool::Line,
        ToolOp::Block => state.tool = Tool::Block,
        ToolOp::Colour => {
            state.tool = Tool::Colour;
            canvas.set_colour(state.accumulator as u32);
        }
        ToolOp::TargetX => state.tx = state.accumulator,
        ToolOp::TargetY => state.ty = state.accumulator,
        ToolOp::Show => canvas.show(),
        ToolOp::Pause => canvas.pause(u32::try_from(state.accumulator).unwrap_or(0)),
        ToolOp::NextFrame => state.frame_boundary_hit = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::RecordingCanvas;
    use crate::codec::encode;

    fn tool(op: ToolOp) -> u8 {
        encode(Opcode::Tool, op as i32)
    }

    fn dx(delta: i32) -> u8 {
        encode(Opcode::Dx, delta)
    }

    fn dy(delta: i32) -> u8 {
        encode(Opcode::Dy, delta)
    }

    fn data(chunk: u8) -> u8 {
        0xC0 | chunk
    }

    fn run(state: &mut DrawingState, bytes: &[u8]) -> Vec<String> {
        let mut canvas = RecordingCanvas::default();
        for &byte in bytes {
            apply(state, &mut canvas, byte);
        }
        canvas.calls
    }

    #[test]
    fn test_data_accumulates_most_significant_first() {
        let mut state = DrawingState::new();
        run(&mut state, &[data(0b000001), data(0b000010)]);
        assert_eq!(state.accumulator, 66);

        run(&mut state, &[tool(ToolOp::TargetX)]);
        assert_eq!(state.tx, 66);
        assert_eq!(state.accumulator, 0);
    }

    #[test]
    fn test_data_uses_unsigned_chunk() {
        let mut state = DrawingState::new();
        run(&mut state, &[data(0x3F)]);
        assert_eq!(state.accumulator, 63);
    }

    #[test]
    fn test_tool_always_clears_accumulator() {
        for operand in -32..=31 {
            let mut state = DrawingState::new();
            run(&mut state, &[data(5), encode(Opcode::Tool, operand)]);
            assert_eq!(state.accumulator, 0, "tool operand {operand}");
        }
    }

    #[test]
    fn test_line_draws_from_cursor_to_target() {
        let mut state = DrawingState::new();
        state.x = 10;
        state.y = 20;
        state.tx = 10;
        state.ty = 20;
        let calls = run(&mut state, &[dx(5), dy(-3)]);
        assert_eq!(calls, vec!["line(10, 20, 15, 17)"]);
        assert_eq!(state.cursor(), (15, 17));
        assert_eq!(state.target(), (15, 17));
    }

    #[test]
    fn test_dx_alone_does_not_move_cursor() {
        let mut state = DrawingState::new();
        let calls = run(&mut state, &[dx(7), dx(-2)]);
        assert!(calls.is_empty());
        assert_eq!(state.cursor(), (0, 0));
        assert_eq!(state.target(), (5, 0));
    }

    #[test]
    fn test_none_tool_moves_without_drawing() {
        let mut state = DrawingState::new();
        let calls = run(&mut state, &[tool(ToolOp::None), dx(4), dy(6)]);
        assert!(calls.is_empty());
        assert_eq!(state.cursor(), (4, 6));
    }

    #[test]
    fn test_block_allows_negative_size() {
        let mut state = DrawingState::new();
        state.x = 10;
        state.y = 10;
        state.tx = 10;
        state.ty = 10;
        let calls = run(&mut state, &[tool(ToolOp::Block), dx(-4), dy(3)]);
        assert_eq!(calls, vec!["block(10, 10, -4, 3)"]);
        assert_eq!(state.cursor(), (6, 13));
    }

    #[test]
    fn test_colour_sets_tool_and_colour() {
        let mut state = DrawingState::new();
        // 0xFF0000FF split into six-bit chunks
        let bytes = [
            data(0b000011),
            data(0b111111),
            data(0b000000),
            data(0b000000),
            data(0b000011),
            data(0b111111),
            tool(ToolOp::Colour),
        ];
        let calls = run(&mut state, &bytes);
        assert_eq!(calls, vec!["set_colour(0xFF0000FF)"]);
        assert_eq!(state.tool, Tool::Colour);

        // Colour tool draws nothing but still moves the cursor
        let calls = run(&mut state, &[dx(1), dy(1)]);
        assert!(calls.is_empty());
        assert_eq!(state.cursor(), (1, 1));
    }

    #[test]
    fn test_absolute_targets() {
        let mut state = DrawingState::new();
        run(
            &mut state,
            &[
                data(1),
                data(0),
                tool(ToolOp::TargetX),
                data(2),
                tool(ToolOp::TargetY),
            ],
        );
        assert_eq!(state.target(), (64, 2));
        assert_eq!(state.cursor(), (0, 0));
    }

    #[test]
    fn test_show_and_pause() {
        let mut state = DrawingState::new();
        let calls = run(
            &mut state,
            &[tool(ToolOp::Show), data(1), data(50), tool(ToolOp::Pause)],
        );
        assert_eq!(calls, vec!["show()", "pause(114)"]);
    }

    #[test]
    fn test_negative_pause_clamps_to_zero() {
        let mut state = DrawingState::new();
        state.accumulator = -5;
        let calls = run(&mut state, &[tool(ToolOp::Pause)]);
        assert_eq!(calls, vec!["pause(0)"]);
    }

    #[test]
    fn test_next_frame_sets_flag_only() {
        let mut state = DrawingState::new();
        let calls = run(&mut state, &[tool(ToolOp::NextFrame)]);
        assert!(calls.is_empty());
        assert!(state.frame_boundary_hit);
        assert_eq!(state.resume_offset, 0);
    }

    #[test]
    fn test_unknown_tool_is_noop() {
        let mut state = DrawingState::new();
        state.tool = Tool::Block;
        let calls = run(&mut state, &[data(9), encode(Opcode::Tool, 20)]);
        assert!(calls.is_empty());
        assert_eq!(state.tool, Tool::Block);
        assert_eq!(state.accumulator, 0);
    }
}
