//! Drawing state carried between instructions.

/// The drawing tool applied when a DX/DY displacement pair completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    /// Move without drawing.
    None,
    /// Draw a line from the cursor to the target.
    #[default]
    Line,
    /// Selected by the colour instruction; moves without drawing.
    Colour,
    /// Fill the rectangle spanned by the cursor and the target.
    Block,
}

/// Mutable state of a sketch being played.
///
/// One instance exists per open file. The executor updates it byte by byte
/// and the frame player uses the resume bookkeeping to split a file into
/// frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingState {
    /// Current cursor x.
    pub x: i32,
    /// Current cursor y.
    pub y: i32,
    /// Pending target x.
    pub tx: i32,
    /// Pending target y.
    pub ty: i32,
    /// Last explicitly selected tool.
    pub tool: Tool,
    /// Operand assembled from DATA instructions, most significant chunk first.
    pub accumulator: i32,
    /// Byte index at which the next replay pass begins.
    pub resume_offset: usize,
    /// Set while a replay pass is ending at a frame marker.
    pub frame_boundary_hit: bool,
}

impl DrawingState {
    pub const fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            tx: 0,
            ty: 0,
            tool: Tool::Line,
            accumulator: 0,
            resume_offset: 0,
            frame_boundary_hit: false,
        }
    }

    /// Current cursor position.
    pub const fn cursor(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Pending target position.
    pub const fn target(&self) -> (i32, i32) {
        (self.tx, self.ty)
    }

    /// Reset the fields that only live for one replay pass.
    ///
    /// The resume offset and accumulator are left alone.
    pub fn reset_pass(&mut self) {
        self.x = 0;
        self.y = 0;
        self.tx = 0;
        self.ty = 0;
        self.tool = Tool::Line;
    }

    /// Return to the start of the file, as when a new file is opened.
    pub fn rewind(&mut self) {
        *self = Self::new();
    }
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = DrawingState::new();
        assert_eq!(state.cursor(), (0, 0));
        assert_eq!(state.target(), (0, 0));
        assert_eq!(state.tool, Tool::Line);
        assert_eq!(state.accumulator, 0);
        assert_eq!(state.resume_offset, 0);
        assert!(!state.frame_boundary_hit);
        assert_eq!(state, DrawingState::default());
    }

    #[test]
    fn test_reset_pass_keeps_resume_and_accumulator() {
        let mut state = DrawingState {
            x: 5,
            y: -3,
            tx: 7,
            ty: 9,
            tool: Tool::Block,
            accumulator: 42,
            resume_offset: 12,
            frame_boundary_hit: false,
        };
        state.reset_pass();
        assert_eq!(state.cursor(), (0, 0));
        assert_eq!(state.target(), (0, 0));
        assert_eq!(state.tool, Tool::Line);
        assert_eq!(state.accumulator, 42);
        assert_eq!(state.resume_offset, 12);
    }

    #[test]
    fn test_rewind() {
        let mut state = DrawingState::new();
        state.resume_offset = 30;
        state.accumulator = 7;
        state.tool = Tool::None;
        state.rewind();
        assert_eq!(state, DrawingState::new());
    }
}
