//! Sketch disassembler.
//!
//! Converts a sketch byte stream into a human-readable listing, one line
//! per byte, grouped by frame.

use std::fmt::Write;

use crate::codec::{Instruction, Opcode, ToolOp};

/// A disassembled instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisassembledInstr {
    /// Byte offset in the stream.
    pub offset: usize,
    /// The raw instruction byte.
    pub byte: u8,
    /// Frame the instruction belongs to (0-based).
    pub frame: usize,
    /// Human-readable instruction text (e.g., "DX +3").
    pub text: String,
}

/// Disassemble every byte of a sketch.
pub fn disassemble(bytes: &[u8]) -> Vec<DisassembledInstr> {
    let mut frame = 0;
    let mut result = Vec::with_capacity(bytes.len());

    for (offset, &byte) in bytes.iter().enumerate() {
        let instr = Instruction::decode(byte);
        result.push(DisassembledInstr {
            offset,
            byte,
            frame,
            text: instruction_text(&instr),
        });
        if instr.tool_op() == Some(ToolOp::NextFrame) {
            frame += 1;
        }
    }

    result
}

/// Text for a single instruction.
pub fn instruction_text(instr: &Instruction) -> String {
    match instr.opcode {
        Opcode::Tool => match instr.tool_op() {
            Some(op) => format!("TOOL {}", op.name()),
            None => format!("TOOL ??? ({})", instr.operand),
        },
        Opcode::Dx | Opcode::Dy => format!("{} {:+}", instr.opcode.mnemonic(), instr.operand),
        Opcode::Data => format!("DATA 0x{:02X}", instr.chunk()),
    }
}

/// Render a full listing with a `; frame N` header before each frame.
pub fn format_listing(bytes: &[u8]) -> String {
    let mut out = String::new();
    let mut current_frame = None;

    for instr in disassemble(bytes) {
        if current_frame != Some(instr.frame) {
            current_frame = Some(instr.frame);
            let _ = writeln!(out, "; frame {}", instr.frame);
        }
        let _ = writeln!(out, "{:04}  {:02X}  {}", instr.offset, instr.byte, instr.text);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_text() {
        let text = |b: u8| instruction_text(&Instruction::decode(b));
        assert_eq!(text(0x01), "TOOL line");
        assert_eq!(text(0x08), "TOOL nextframe");
        assert_eq!(text(0x0C), "TOOL ??? (12)");
        assert_eq!(text(0x43), "DX +3");
        assert_eq!(text(0xBF), "DY -1");
        assert_eq!(text(0xEA), "DATA 0x2A");
    }

    #[test]
    fn test_frames_are_numbered() {
        let listing = disassemble(&[0x41, 0x08, 0x81]);
        let frames: Vec<usize> = listing.iter().map(|i| i.frame).collect();
        assert_eq!(frames, vec![0, 0, 1]);
        assert_eq!(listing[2].offset, 2);
        assert_eq!(listing[2].byte, 0x81);
    }

    #[test]
    fn test_format_listing() {
        let listing = format_listing(&[0x41, 0x08, 0x81]);
        assert_eq!(
            listing,
            "; frame 0\n0000  41  DX +1\n0001  08  TOOL nextframe\n; frame 1\n0002  81  DY +1\n"
        );
    }

    #[test]
    fn test_empty_listing() {
        assert!(disassemble(&[]).is_empty());
        assert_eq!(format_listing(&[]), "");
    }
}
