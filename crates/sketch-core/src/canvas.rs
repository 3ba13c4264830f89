//! The drawing surface a sketch is played onto.

/// Trait for drawing surfaces driven by the executor.
///
/// Implement this trait to play sketches onto your target (a terminal, a
/// window, an image buffer, a recorder in tests). All calls are
/// fire-and-forget.
///
/// # Coordinate System
///
/// Integer coordinates with the origin at the top-left, x increasing
/// rightward and y increasing downward. Positions outside the visible area
/// are legal and should be clipped by the surface.
pub trait Canvas {
    /// Draw a line from (x0, y0) to (x1, y1) in the current colour.
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);

    /// Fill the rectangle with corner (x, y) and size (w, h).
    ///
    /// Width and height may be negative, in which case the rectangle
    /// extends left of or above the corner.
    fn block(&mut self, x: i32, y: i32, w: i32, h: i32);

    /// Set the drawing colour (packed RGBA: 0xRRGGBBAA).
    fn set_colour(&mut self, rgba: u32);

    /// Make everything drawn so far visible.
    fn show(&mut self);

    /// Show the drawing, then wait for the given number of milliseconds.
    fn pause(&mut self, millis: u32);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        (**self).line(x0, y0, x1, y1);
    }

    fn block(&mut self, x: i32, y: i32, w: i32, h: i32) {
        (**self).block(x, y, w, h);
    }

    fn set_colour(&mut self, rgba: u32) {
        (**self).set_colour(rgba);
    }

    fn show(&mut self) {
        (**self).show();
    }

    fn pause(&mut self, millis: u32) {
        (**self).pause(millis);
    }
}
