//! Draw commands: the surface primitives as data.
//!
//! Every call the frame pipeline makes on a [`Surface`] maps to exactly one
//! command, so a recorded frame can be inspected, serialized, or replayed
//! onto another surface.

use serde::{Deserialize, Serialize};

use crate::{Color, Surface};

/// One drawing-surface primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Clear a rectangle to transparent black.
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Start a new path.
    BeginPath,
    /// Add an arc to the current path.
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    },
    /// Set the fill color.
    SetFillColor { color: Color },
    /// Fill the current path.
    Fill,
}

impl DrawCommand {
    /// Check if this command draws pixels (as opposed to clearing or state).
    #[must_use]
    pub const fn is_fill(&self) -> bool {
        matches!(self, Self::Fill)
    }

    /// Check if this command clears pixels.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        matches!(self, Self::ClearRect { .. })
    }

    /// Issue this command against a surface.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        match *self {
            Self::ClearRect {
                x,
                y,
                width,
                height,
            } => surface.clear_rect(x, y, width, height),
            Self::BeginPath => surface.begin_path(),
            Self::Arc {
                x,
                y,
                radius,
                start_angle,
                end_angle,
                counterclockwise,
            } => surface.arc(x, y, radius, start_angle, end_angle, counterclockwise),
            Self::SetFillColor { color } => surface.set_fill_color(color),
            Self::Fill => surface.fill(),
        }
    }
}

/// Replay a command list onto a surface, in order.
pub fn replay<S: Surface + ?Sized>(commands: &[DrawCommand], surface: &mut S) {
    for cmd in commands {
        cmd.apply(surface);
    }
}
