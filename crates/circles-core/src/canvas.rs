//! Recording surface: captures surface primitives as `DrawCommand`s.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::draw::DrawCommand;
use crate::{Color, Surface};

/// A filled full circle reassembled from recorded commands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilledCircle {
    /// Center x
    pub x: f64,
    /// Center y
    pub y: f64,
    /// Radius
    pub radius: f64,
    /// Fill color in effect at the fill
    pub color: Color,
}

/// A [`Surface`] that records every call instead of drawing.
///
/// This is useful for:
/// - Testing (verify what a frame painted, and in what order)
/// - Serialization (ship a frame's commands elsewhere)
/// - Replaying a frame onto another surface
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(300, 150)
    }
}

impl RecordingSurface {
    /// Create a recording surface reporting the given size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Change the reported size, as a host resizing its canvas would.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Get the recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the recording.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of `ClearRect` commands recorded.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_clear()).count()
    }

    /// Number of `Fill` commands recorded.
    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_fill()).count()
    }

    /// Filled full circles, in the order they were filled.
    #[must_use]
    pub fn circles(&self) -> Vec<FilledCircle> {
        circles_in(&self.commands)
    }
}

/// Reassemble the full-circle fills in a command list.
///
/// Each `Fill` yields one circle per full-sweep arc in the current path,
/// colored with the fill color in effect at that point.
#[must_use]
pub fn circles_in(commands: &[DrawCommand]) -> Vec<FilledCircle> {
    let mut circles = Vec::new();
    let mut path: Vec<(f64, f64, f64)> = Vec::new();
    let mut color = Color::BLACK;

    for cmd in commands {
        match *cmd {
            DrawCommand::BeginPath => path.clear(),
            DrawCommand::Arc {
                x,
                y,
                radius,
                start_angle,
                end_angle,
                ..
            } if (end_angle - start_angle).abs() >= TAU => path.push((x, y, radius)),
            DrawCommand::SetFillColor { color: c } => color = c,
            DrawCommand::Fill => circles.extend(path.iter().map(|&(x, y, radius)| FilledCircle {
                x,
                y,
                radius,
                color,
            })),
            _ => {}
        }
    }

    circles
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
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
        self.commands.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            counterclockwise,
        });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillColor { color });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_empty() {
        let surface = RecordingSurface::new(640, 480);
        assert!(surface.is_empty());
        assert_eq!(surface.command_count(), 0);
        assert_eq!(surface.width(), 640);
        assert_eq!(surface.height(), 480);
    }

    #[test]
    fn test_recording_surface_default_matches_canvas_default() {
        let surface = RecordingSurface::default();
        assert_eq!((surface.width(), surface.height()), (300, 150));
    }

    #[test]
    fn test_clear_covers_whole_surface() {
        let mut surface = RecordingSurface::new(64, 32);
        surface.clear();
        assert_eq!(
            surface.commands(),
            &[DrawCommand::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 64.0,
                height: 32.0
            }]
        );
    }

    #[test]
    fn test_fill_circle_command_sequence() {
        let mut surface = RecordingSurface::default();
        surface.fill_circle(10.0, 12.0, 5.0, Color::RED);

        let cmds = surface.commands();
        assert_eq!(cmds.len(), 4);
        assert_eq!(cmds[0], DrawCommand::BeginPath);
        assert_eq!(
            cmds[1],
            DrawCommand::Arc {
                x: 10.0,
                y: 12.0,
                radius: 5.0,
                start_angle: 0.0,
                end_angle: TAU,
                counterclockwise: false
            }
        );
        assert_eq!(cmds[2], DrawCommand::SetFillColor { color: Color::RED });
        assert_eq!(cmds[3], DrawCommand::Fill);
    }

    #[test]
    fn test_circles_reassembled_in_order() {
        let mut surface = RecordingSurface::default();
        surface.clear();
        surface.fill_circle(1.0, 1.0, 1.0, Color::RED);
        surface.fill_circle(2.0, 2.0, 2.0, Color::GREEN);

        let circles = surface.circles();
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0].color, Color::RED);
        assert_eq!(circles[1].radius, 2.0);
        assert_eq!(surface.fill_count(), 2);
        assert_eq!(surface.clear_count(), 1);
    }

    #[test]
    fn test_partial_arcs_are_not_circles() {
        let mut surface = RecordingSurface::default();
        surface.begin_path();
        surface.arc(0.0, 0.0, 4.0, 0.0, 1.0, false);
        surface.fill();
        assert!(surface.circles().is_empty());
    }

    #[test]
    fn test_take_commands_resets_recording() {
        let mut surface = RecordingSurface::default();
        surface.fill_circle(1.0, 1.0, 1.0, Color::BLUE);
        let taken = surface.take_commands();
        assert_eq!(taken.len(), 4);
        assert!(surface.is_empty());
    }

    #[test]
    fn test_resize_changes_reported_size() {
        let mut surface = RecordingSurface::new(1, 1);
        surface.resize(800, 600);
        assert_eq!((surface.width(), surface.height()), (800, 600));
    }
}
