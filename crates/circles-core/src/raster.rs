//! Software raster surface backed by an RGBA8 framebuffer.
//!
//! Only full-sweep arcs are rasterized, as solid discs; a pixel belongs to a
//! disc when its center lies within the radius. Partial arcs are kept in the
//! path but contribute no pixels.

use std::f64::consts::TAU;

use crate::{Color, Surface};

#[derive(Debug, Clone, Copy)]
struct Disc {
    x: f64,
    y: f64,
    radius: f64,
}

/// A [`Surface`] that draws into memory.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    path: Vec<Disc>,
    fill_color: Color,
}

impl PixelSurface {
    /// Create a transparent surface of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width as usize * height as usize],
            path: Vec::new(),
            fill_color: Color::BLACK,
        }
    }

    /// RGBA value of a pixel, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.width && y < self.height).then(|| self.pixels[self.index(x, y)])
    }

    /// Check if every pixel is transparent black.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.pixels.iter().all(|p| *p == [0; 4])
    }

    /// Number of pixels that are not transparent black.
    #[must_use]
    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| **p != [0; 4]).count()
    }

    /// Fill every pixel with a color, e.g. to detect a missing clear.
    pub fn flood(&mut self, color: Color) {
        self.pixels.fill(color.to_rgba8());
    }

    /// The framebuffer, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Pixel index range `[lo, hi)` covered by `[from, to]` along one axis.
    fn span(from: f64, to: f64, limit: u32) -> (u32, u32) {
        let lo = from.floor().clamp(0.0, f64::from(limit)) as u32;
        let hi = to.ceil().clamp(0.0, f64::from(limit)) as u32;
        (lo, hi)
    }

    fn fill_disc(&mut self, disc: Disc, rgba: [u8; 4], alpha: f32) {
        if disc.radius.is_nan() || disc.radius <= 0.0 {
            return;
        }
        let r2 = disc.radius * disc.radius;
        let (x0, x1) = Self::span(disc.x - disc.radius, disc.x + disc.radius, self.width);
        let (y0, y1) = Self::span(disc.y - disc.radius, disc.y + disc.radius, self.height);

        for py in y0..y1 {
            let dy = f64::from(py) + 0.5 - disc.y;
            for px in x0..x1 {
                let dx = f64::from(px) + 0.5 - disc.x;
                if dx * dx + dy * dy <= r2 {
                    let i = self.index(px, py);
                    self.pixels[i] = blend_over(rgba, alpha, self.pixels[i]);
                }
            }
        }
    }
}

/// Source-over compositing of `src` at `alpha` onto `dst`.
fn blend_over(src: [u8; 4], alpha: f32, dst: [u8; 4]) -> [u8; 4] {
    if alpha >= 1.0 {
        return src;
    }
    let sa = alpha;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0; 4];
    }
    let mix = |s: u8, d: u8| {
        let c = (f32::from(s) * sa + f32::from(d) * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };
    [
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ]
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (x0, x1) = Self::span(x, x + width, self.width);
        let (y0, y1) = Self::span(y, y + height, self.height);
        if x1 <= x0 {
            return;
        }
        for py in y0..y1 {
            let row = self.index(x0, py);
            self.pixels[row..row + (x1 - x0) as usize].fill([0; 4]);
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        _counterclockwise: bool,
    ) {
        if (end_angle - start_angle).abs() >= TAU {
            self.path.push(Disc { x, y, radius });
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn fill(&mut self) {
        let rgba = self.fill_color.to_rgba8();
        let alpha = self.fill_color.a;
        for disc in std::mem::take(&mut self.path) {
            self.fill_disc(disc, rgba, alpha);
            self.path.push(disc);
        }
    }
}
