//! Fill colors built from the integer channels of a circle record.

use serde::{Deserialize, Serialize};

/// RGBA fill color: 8-bit color channels and an alpha in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping alpha to [0.0, 1.0].
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from raw record channels.
    ///
    /// Channels outside `0..=255` saturate, which is what a CSS `rgba()`
    /// color does with out-of-range integers.
    #[must_use]
    pub fn from_channels(r: i32, g: i32, b: i32) -> Self {
        Self::rgb(saturate(r), saturate(g), saturate(b))
    }

    /// Format as a CSS color string, e.g. `rgba(255,0,0,1)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }

    /// Convert to RGBA8 with alpha scaled to `0..=255`.
    #[must_use]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, (self.a * 255.0).round() as u8]
    }

    /// Check if the color is fully opaque.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Black color
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Red color
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Green color
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Blue color
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn saturate(channel: i32) -> u8 {
    channel.clamp(0, i32::from(u8::MAX)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color_constants() {
        assert_eq!(Color::BLACK.r, 0);
        assert_eq!(Color::RED.r, 255);
        assert_eq!(Color::GREEN.g, 255);
        assert_eq!(Color::BLUE.b, 255);
        assert_eq!(Color::TRANSPARENT.a, 0.0);
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_color_new_clamps_alpha() {
        assert_eq!(Color::new(1, 2, 3, 2.0).a, 1.0);
        assert_eq!(Color::new(1, 2, 3, -1.0).a, 0.0);
    }

    #[test]
    fn test_color_from_channels_saturates() {
        let c = Color::from_channels(-20, 128, 999);
        assert_eq!(c, Color::rgb(0, 128, 255));
        assert!(c.is_opaque());
    }

    #[test]
    fn test_color_to_css() {
        assert_eq!(Color::RED.to_css(), "rgba(255,0,0,1)");
        assert_eq!(Color::new(1, 2, 3, 0.5).to_css(), "rgba(1,2,3,0.5)");
    }

    #[test]
    fn test_color_to_rgba8() {
        assert_eq!(Color::GREEN.to_rgba8(), [0, 255, 0, 255]);
        assert_eq!(Color::TRANSPARENT.to_rgba8(), [0, 0, 0, 0]);
    }

    proptest! {
        #[test]
        fn prop_in_range_channels_pass_through(r in 0i32..=255, g in 0i32..=255, b in 0i32..=255) {
            let c = Color::from_channels(r, g, b);
            prop_assert_eq!(i32::from(c.r), r);
            prop_assert_eq!(i32::from(c.g), g);
            prop_assert_eq!(i32::from(c.b), b);
        }
    }
}
