//! The drawing-surface seam.
//!
//! A [`Surface`] exposes the handful of canvas primitives the frame pipeline
//! consumes. Browser builds implement it over a Canvas 2D context; tests use
//! [`RecordingSurface`](crate::RecordingSurface) and
//! [`PixelSurface`](crate::PixelSurface).

use std::f64::consts::TAU;

use crate::Color;

/// A 2D drawing surface with path-based arc filling.
pub trait Surface {
    /// Current width in pixels.
    fn width(&self) -> u32;

    /// Current height in pixels.
    fn height(&self) -> u32;

    /// Clear a rectangle to transparent black.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Start a new path, discarding any pending subpaths.
    fn begin_path(&mut self);

    /// Add an arc to the current path.
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    );

    /// Set the color used by [`fill`](Self::fill).
    fn set_fill_color(&mut self, color: Color);

    /// Fill the current path.
    fn fill(&mut self);

    /// Clear the whole visible surface.
    fn clear(&mut self) {
        let (width, height) = (f64::from(self.width()), f64::from(self.height()));
        self.clear_rect(0.0, 0.0, width, height);
    }

    /// Fill a full circle: begin path, 0..2π arc, set color, fill.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.begin_path();
        self.arc(x, y, radius, 0.0, TAU, false);
        self.set_fill_color(color);
        self.fill();
    }
}

impl<T: Surface + ?Sized> Surface for &mut T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        (**self).clear_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) {
        (**self).arc(x, y, radius, start_angle, end_angle, counterclockwise);
    }

    fn set_fill_color(&mut self, color: Color) {
        (**self).set_fill_color(color);
    }

    fn fill(&mut self) {
        (**self).fill();
    }
}

impl<T: Surface + ?Sized> Surface for Box<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        (**self).clear_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) {
        (**self).arc(x, y, radius, start_angle, end_angle, counterclockwise);
    }

    fn set_fill_color(&mut self, color: Color) {
        (**self).set_fill_color(color);
    }

    fn fill(&mut self) {
        (**self).fill();
    }
}
