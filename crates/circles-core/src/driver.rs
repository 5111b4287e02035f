//! Frame driver: one simulate-view-clear-draw pass.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RecordLayout;
use crate::view::BufferView;
use crate::{CircleRecord, Simulation, Surface};

/// What one frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Zero-based frame index.
    pub frame: u64,
    /// Byte address the simulation returned.
    pub offset: usize,
    /// Circles drawn.
    pub circles: usize,
    /// Surface width passed to the simulation.
    pub width: u32,
    /// Surface height passed to the simulation.
    pub height: u32,
}

/// Draws one frame of simulation output onto a surface.
///
/// The driver owns its surface, so there is exactly one surface per driver
/// and nothing global.
#[derive(Debug)]
pub struct FrameDriver<S, C> {
    layout: RecordLayout,
    simulation: S,
    surface: C,
    frames: u64,
    zero_size_logged: bool,
}

impl<S: Simulation, C: Surface> FrameDriver<S, C> {
    /// Create a driver reading `layout` from `simulation` onto `surface`.
    pub const fn new(layout: RecordLayout, simulation: S, surface: C) -> Self {
        Self {
            layout,
            simulation,
            surface,
            frames: 0,
            zero_size_logged: false,
        }
    }

    /// Run one frame.
    ///
    /// Queries the simulation with the surface's current size, views the
    /// returned buffer, clears the surface, then fills one circle per record
    /// in buffer order, so later records paint over earlier ones.
    pub fn render_frame(&mut self) -> FrameReport {
        let width = self.surface.width();
        let height = self.surface.height();
        if (width == 0 || height == 0) && !self.zero_size_logged {
            debug!(width, height, "surface has zero area; passing size through");
            self.zero_size_logged = true;
        }

        let offset = self.simulation.advance(width, height);
        let view = BufferView::new(
            self.simulation.region(),
            offset,
            self.layout.data_length(),
            self.layout.stride_length(),
        );

        self.surface.clear();
        let mut circles = 0;
        for record in view.records() {
            draw_record(&mut self.surface, &record);
            circles += 1;
        }

        let report = FrameReport {
            frame: self.frames,
            offset,
            circles,
            width,
            height,
        };
        debug!(frame = report.frame, offset, circles, "frame drawn");
        self.frames += 1;
        report
    }

    /// Record layout read each frame.
    pub const fn layout(&self) -> RecordLayout {
        self.layout
    }

    /// Frames drawn so far.
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// The simulation.
    pub const fn simulation(&self) -> &S {
        &self.simulation
    }

    /// Mutable access to the simulation.
    pub fn simulation_mut(&mut self) -> &mut S {
        &mut self.simulation
    }

    /// The surface.
    pub const fn surface(&self) -> &C {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut C {
        &mut self.surface
    }

    /// Consume the driver, returning its collaborators.
    pub fn into_parts(self) -> (S, C) {
        (self.simulation, self.surface)
    }
}

/// Fill one record as an opaque full circle.
pub fn draw_record<C: Surface + ?Sized>(surface: &mut C, record: &CircleRecord) {
    surface.fill_circle(
        f64::from(record.x),
        f64::from(record.y),
        f64::from(record.radius),
        record.color(),
    );
}
