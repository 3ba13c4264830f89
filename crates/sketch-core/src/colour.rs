//! RGBA colour values as produced by the colour instruction.

/// RGBA colour with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour with explicit RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque colour (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpack a 32-bit RGBA value (0xRRGGBBAA format).
    pub const fn from_packed(rgba: u32) -> Self {
        Self {
            r: ((rgba >> 24) & 0xFF) as u8,
            g: ((rgba >> 16) & 0xFF) as u8,
            b: ((rgba >> 8) & 0xFF) as u8,
            a: (rgba & 0xFF) as u8,
        }
    }

    /// Pack into a 32-bit RGBA value (0xRRGGBBAA format).
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 24)
            | ((self.g as u32) << 16)
            | ((self.b as u32) << 8)
            | (self.a as u32)
    }

    // Common colours
    pub const WHITE: Colour = Colour::rgb(255, 255, 255);
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);
    pub const TRANSPARENT: Colour = Colour::new(0, 0, 0, 0);

    /// Whether the alpha channel makes this colour invisible.
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl From<u32> for Colour {
    fn from(rgba: u32) -> Self {
        Colour::from_packed(rgba)
    }
}
