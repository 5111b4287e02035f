//! The circle record: six signed integers laid out by the simulation.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::Color;

/// Number of fields in a circle record.
pub const RECORD_FIELDS: usize = 6;

/// Size in bytes of one record element.
pub const ELEMENT_SIZE: usize = std::mem::size_of::<i32>();

/// One circle as the simulation writes it: `x, y, radius, red, green, blue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct CircleRecord {
    /// Center x in surface pixels
    pub x: i32,
    /// Center y in surface pixels
    pub y: i32,
    /// Radius in pixels
    pub radius: i32,
    /// Red channel
    pub red: i32,
    /// Green channel
    pub green: i32,
    /// Blue channel
    pub blue: i32,
}

impl CircleRecord {
    /// Create a record from its six fields.
    #[must_use]
    pub const fn new(x: i32, y: i32, radius: i32, red: i32, green: i32, blue: i32) -> Self {
        Self {
            x,
            y,
            radius,
            red,
            green,
            blue,
        }
    }

    /// Destructure the leading six elements of a stride-sized chunk.
    ///
    /// Elements past the sixth belong to the simulation and are ignored.
    ///
    /// # Panics
    ///
    /// Panics if the chunk holds fewer than [`RECORD_FIELDS`] elements.
    #[must_use]
    pub fn from_chunk(chunk: &[i32]) -> Self {
        let &[x, y, radius, red, green, blue, ..] = chunk else {
            panic!(
                "circle chunk has {} elements, need {RECORD_FIELDS}",
                chunk.len()
            );
        };
        Self::new(x, y, radius, red, green, blue)
    }

    /// The record's fields in buffer order.
    #[must_use]
    pub const fn to_array(self) -> [i32; RECORD_FIELDS] {
        [self.x, self.y, self.radius, self.red, self.green, self.blue]
    }

    /// Opaque fill color for this record.
    #[must_use]
    pub fn color(&self) -> Color {
        Color::from_channels(self.red, self.green, self.blue)
    }
}

impl From<[i32; RECORD_FIELDS]> for CircleRecord {
    fn from(fields: [i32; RECORD_FIELDS]) -> Self {
        bytemuck::cast(fields)
    }
}
