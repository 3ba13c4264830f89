//! Instruction byte decoding.
//!
//! Every byte of a sketch is one instruction. The two most significant
//! bits select the opcode class and the low six bits carry a signed operand:
//!
//! ```text
//! Bit:   7 6 | 5 4 3 2 1 0
//!        OP  | S N N N N N
//! ```
//!
//! | Opcode | Bits | Operand                           |
//! |--------|------|-----------------------------------|
//! | TOOL   | `00` | tool / control selector           |
//! | DX     | `01` | signed horizontal delta           |
//! | DY     | `10` | signed vertical delta, then draw  |
//! | DATA   | `11` | 6-bit chunk shifted into the accumulator |
//!
//! The operand is a six-bit two's-complement value in `-32..=31`: bit 5
//! weighs `-32` and bits 0-4 are added as an unsigned number.

/// Mask for the operand bits of an instruction byte.
pub const OPERAND_MASK: u8 = 0x3F;

/// Number of bits each DATA instruction shifts into the accumulator.
pub const DATA_BITS: u32 = 6;

/// The four instruction classes, selected by the top two bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Select a tool or run a control action.
    Tool = 0,
    /// Move the target horizontally.
    Dx = 1,
    /// Move the target vertically and draw with the current tool.
    Dy = 2,
    /// Shift six more bits into the accumulator.
    Data = 3,
}

impl Opcode {
    /// Build an opcode from the two low bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Opcode::Tool,
            1 => Opcode::Dx,
            2 => Opcode::Dy,
            _ => Opcode::Data,
        }
    }

    /// Upper-case mnemonic used in listings.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Tool => "TOOL",
            Opcode::Dx => "DX",
            Opcode::Dy => "DY",
            Opcode::Data => "DATA",
        }
    }
}

/// Extract the opcode class from the two most significant bits.
pub const fn decode_opcode(byte: u8) -> Opcode {
    Opcode::from_bits(byte >> 6)
}

/// Extract the signed operand (`-32..=31`) from the low six bits.
///
/// # Example
/// ```
/// use sketch_core::decode_operand;
/// assert_eq!(decode_operand(0x1F), 31);
/// assert_eq!(decode_operand(0x20), -32);
/// assert_eq!(decode_operand(0x3F), -1);
/// ```
pub const fn decode_operand(byte: u8) -> i32 {
    let bits = (byte & OPERAND_MASK) as i32;
    -(bits & 32) + (bits & 31)
}

/// Pack an opcode and operand into an instruction byte.
///
/// Only the low six bits of `operand` are kept, so any value in
/// `-32..=31` survives a trip through [`decode_operand`].
pub const fn encode(opcode: Opcode, operand: i32) -> u8 {
    ((opcode as u8) << 6) | (operand as u8 & OPERAND_MASK)
}

/// Sub-actions of the TOOL opcode, numbered by their operand value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ToolOp {
    /// Stop drawing on DY.
    None = 0,
    /// Draw lines on DY.
    Line = 1,
    /// Draw filled rectangles on DY.
    Block = 2,
    /// Set the drawing colour from the accumulator.
    Colour = 3,
    /// Set the target x coordinate from the accumulator.
    TargetX = 4,
    /// Set the target y coordinate from the accumulator.
    TargetY = 5,
    /// Flush drawing to the display.
    Show = 6,
    /// Wait for the accumulator's value in milliseconds.
    Pause = 7,
    /// End the current frame.
    NextFrame = 8,
}

impl ToolOp {
    /// Look up the sub-action for a TOOL operand.
    ///
    /// Returns `None` for operands outside the recognised set; those
    /// instructions are no-ops apart from clearing the accumulator.
    pub const fn from_operand(operand: i32) -> Option<Self> {
        Some(match operand {
            0 => ToolOp::None,
            1 => ToolOp::Line,
            2 => ToolOp::Block,
            3 => ToolOp::Colour,
            4 => ToolOp::TargetX,
            5 => ToolOp::TargetY,
            6 => ToolOp::Show,
            7 => ToolOp::Pause,
            8 => ToolOp::NextFrame,
            _ => return None,
        })
    }

    /// Lower-case name used in listings.
    pub const fn name(self) -> &'static str {
        match self {
            ToolOp::None => "none",
            ToolOp::Line => "line",
            ToolOp::Block => "block",
            ToolOp::Colour => "colour",
            ToolOp::TargetX => "targetx",
            ToolOp::TargetY => "targety",
            ToolOp::Show => "show",
            ToolOp::Pause => "pause",
            ToolOp::NextFrame => "nextframe",
        }
    }
}

/// A decoded instruction byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The byte as stored in the sketch.
    pub raw: u8,
    pub opcode: Opcode,
    /// Signed operand in `-32..=31`.
    pub operand: i32,
}

impl Instruction {
    /// Decode a single byte. Total over all byte values.
    pub const fn decode(byte: u8) -> Self {
        Self {
            raw: byte,
            opcode: decode_opcode(byte),
            operand: decode_operand(byte),
        }
    }

    /// The TOOL sub-action, if this is a TOOL instruction with a known operand.
    pub const fn tool_op(&self) -> Option<ToolOp> {
        match self.opcode {
            Opcode::Tool => ToolOp::from_operand(self.operand),
            _ => None,
        }
    }

    /// The unsigned six-bit chunk a DATA instruction contributes.
    pub const fn chunk(&self) -> i32 {
        (self.raw & OPERAND_MASK) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_is_total() {
        for byte in 0..=u8::MAX {
            let operand = decode_operand(byte);
            assert!((-32..=31).contains(&operand), "byte 0x{byte:02X} -> {operand}");
            let opcode = decode_opcode(byte);
            assert_eq!(opcode as u8, byte >> 6);
        }
    }

    #[test]
    fn test_operand_sign_boundaries() {
        assert_eq!(decode_operand(0x00), 0);
        assert_eq!(decode_operand(0x1F), 31);
        assert_eq!(decode_operand(0x20), -32);
        assert_eq!(decode_operand(0x3F), -1);
        // Opcode bits never leak into the operand
        assert_eq!(decode_operand(0xFF), -1);
        assert_eq!(decode_operand(0x41), 1);
    }

    #[test]
    fn test_opcode_classes() {
        assert_eq!(decode_opcode(0x08), Opcode::Tool);
        assert_eq!(decode_opcode(0x7F), Opcode::Dx);
        assert_eq!(decode_opcode(0x80), Opcode::Dy);
        assert_eq!(decode_opcode(0xC0), Opcode::Data);
    }

    #[test]
    fn test_encode_inverts_decode() {
        for operand in -32..=31 {
            let byte = encode(Opcode::Dy, operand);
            assert_eq!(decode_opcode(byte), Opcode::Dy);
            assert_eq!(decode_operand(byte), operand);
        }
        assert_eq!(encode(Opcode::Tool, 8), 0x08);
        assert_eq!(encode(Opcode::Dx, -1), 0x7F);
    }

    #[test]
    fn test_tool_op_numbering() {
        assert_eq!(ToolOp::from_operand(0), Some(ToolOp::None));
        assert_eq!(ToolOp::from_operand(3), Some(ToolOp::Colour));
        assert_eq!(ToolOp::from_operand(8), Some(ToolOp::NextFrame));
        assert_eq!(ToolOp::from_operand(9), None);
        assert_eq!(ToolOp::from_operand(-1), None);
        assert_eq!(ToolOp::Pause as i32, 7);
    }

    #[test]
    fn test_instruction_decode() {
        let instr = Instruction::decode(0xC2);
        assert_eq!(instr.opcode, Opcode::Data);
        assert_eq!(instr.chunk(), 2);
        assert_eq!(instr.tool_op(), None);

        let instr = Instruction::decode(0x01);
        assert_eq!(instr.tool_op(), Some(ToolOp::Line));

        // DATA chunks are unsigned even when the operand is negative
        let instr = Instruction::decode(0xE0);
        assert_eq!(instr.operand, -32);
        assert_eq!(instr.chunk(), 32);
    }
}
