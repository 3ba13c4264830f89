//! Terminal drawing surface.
//!
//! Sketch output is kept as a display list ([`Scene`]) so it survives
//! across terminal redraws. [`TerminalCanvas`] adapts a scene to the
//! [`sketch_core::Canvas`] trait and hands it to a presenter on every
//! show or pause.

use std::thread;
use std::time::Duration;

use sketch_core::{Canvas, Colour};

/// A primitive in the display list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        colour: Colour,
    },
    /// Filled rectangle, normalised so that `left <= right` and `top <= bottom`.
    Block {
        left: i64,
        top: i64,
        right: i64,
        bottom: i64,
        colour: Colour,
    },
}

/// Everything drawn so far, in sketch coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    width: u32,
    height: u32,
    colour: Colour,
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            colour: Colour::WHITE,
            shapes: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The colour new shapes are drawn with.
    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Drop all shapes and restore the default colour.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.colour = Colour::WHITE;
    }

    pub fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    pub fn push_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        if self.colour.is_transparent() {
            return;
        }
        self.shapes.push(Shape::Line {
            x0,
            y0,
            x1,
            y1,
            colour: self.colour,
        });
    }

    /// Add a rectangle with one corner at (x, y) and extent (w, h).
    /// Negative extents grow towards smaller coordinates.
    ///
    /// An opaque block covering the whole viewport clears the list first.
    pub fn push_block(&mut self, x: i32, y: i32, w: i32, h: i32) {
        if self.colour.is_transparent() {
            return;
        }
        let (x, y) = (i64::from(x), i64::from(y));
        let (x_end, y_end) = (x + i64::from(w), y + i64::from(h));
        let (left, right) = (x.min(x_end), x.max(x_end));
        let (top, bottom) = (y.min(y_end), y.max(y_end));

        if self.colour.a == 0xFF
            && left <= 0
            && top <= 0
            && right >= i64::from(self.width)
            && bottom >= i64::from(self.height)
        {
            log::trace!("viewport cleared, dropping {} shapes", self.shapes.len());
            self.shapes.clear();
        }

        self.shapes.push(Shape::Block {
            left,
            top,
            right,
            bottom,
            colour: self.colour,
        });
    }
}

/// A [`Canvas`] that records into a [`Scene`].
///
/// `present` is called with the scene whenever the sketch asks for its
/// output to become visible.
pub struct TerminalCanvas<'a, F>
where
    F: FnMut(&Scene),
{
    scene: &'a mut Scene,
    present: F,
    max_pause: Duration,
}

impl<'a, F> TerminalCanvas<'a, F>
where
    F: FnMut(&Scene),
{
    pub fn new(scene: &'a mut Scene, present: F, max_pause: Duration) -> Self {
        Self {
            scene,
            present,
            max_pause,
        }
    }
}

impl<F> Canvas for TerminalCanvas<'_, F>
where
    F: FnMut(&Scene),
{
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.scene.push_line(x0, y0, x1, y1);
    }

    fn block(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.scene.push_block(x, y, w, h);
    }

    fn set_colour(&mut self, rgba: u32) {
        self.scene.set_colour(Colour::from_packed(rgba));
    }

    fn show(&mut self) {
        (self.present)(&*self.scene);
    }

    fn pause(&mut self, millis: u32) {
        (self.present)(&*self.scene);
        let wait = Duration::from_millis(u64::from(millis)).min(self.max_pause);
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }
}
