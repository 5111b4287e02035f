//! Test harness for the circles animation loop.

use circles_core::{
    circles_in, draw, AnimationLoop, DrawCommand, FilledCircle, FrameDriver, FrameReport,
    LoopError, PixelSurface, RecordLayout, RecordingSurface, Surface,
};

use crate::fixture::ScriptedSimulation;
use crate::host::ManualHost;

type Loop = AnimationLoop<ScriptedSimulation, RecordingSurface, ManualHost>;

/// Drives an [`AnimationLoop`] frame by frame and keeps each frame's commands.
pub struct Harness {
    lp: Loop,
    frames: Vec<Vec<DrawCommand>>,
    reports: Vec<FrameReport>,
}

impl Harness {
    /// Create a stopped harness with a 300x150 viewport.
    #[must_use]
    pub fn new(layout: RecordLayout, simulation: ScriptedSimulation) -> Self {
        let driver = FrameDriver::new(layout, simulation, RecordingSurface::default());
        Self {
            lp: AnimationLoop::new(driver, ManualHost::new()),
            frames: Vec::new(),
            reports: Vec::new(),
        }
    }

    /// Set the viewport size.
    #[must_use]
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.resize(width, height);
        self
    }

    /// Resize the surface between frames.
    pub fn resize(&mut self, width: u32, height: u32) -> &mut Self {
        self.lp.driver_mut().surface_mut().resize(width, height);
        self
    }

    // === Driving ===

    /// Start the loop.
    ///
    /// # Panics
    ///
    /// Panics if the loop refuses to start.
    pub fn start(&mut self) -> &mut Self {
        self.lp.start().expect("animation loop failed to start");
        self
    }

    /// Start the loop, returning the loop's verdict.
    ///
    /// # Errors
    ///
    /// Whatever [`AnimationLoop::start`] returns.
    pub fn try_start(&mut self) -> Result<(), LoopError> {
        self.lp.start()
    }

    /// Stop the loop.
    pub fn stop(&mut self) -> &mut Self {
        self.lp.stop();
        self
    }

    /// Fire the host's oldest pending callback, if any.
    ///
    /// Returns the frame's report, or `None` when nothing was pending.
    ///
    /// # Panics
    ///
    /// Panics if the loop fails to re-arm.
    pub fn tick(&mut self) -> Option<FrameReport> {
        self.lp.host_mut().fire()?;
        let report = self.lp.on_frame().expect("animation loop failed to re-arm")?;
        let commands = self.lp.driver_mut().surface_mut().take_commands();
        self.frames.push(commands);
        self.reports.push(report);
        Some(report)
    }

    /// Fire up to `n` frames; returns how many were drawn.
    pub fn run(&mut self, n: usize) -> usize {
        (0..n).map_while(|_| self.tick()).count()
    }

    /// Deliver a callback without the host firing one, as a stray or
    /// duplicate callback would.
    ///
    /// # Panics
    ///
    /// Panics if the loop fails to re-arm.
    pub fn spurious_callback(&mut self) -> Option<FrameReport> {
        self.lp.on_frame().expect("animation loop failed to re-arm")
    }

    // === Queries ===

    /// The underlying loop.
    #[must_use]
    pub const fn animation(&self) -> &Loop {
        &self.lp
    }

    /// The frame host.
    #[must_use]
    pub fn host(&self) -> &ManualHost {
        self.lp.host()
    }

    /// Mutable access to the frame host.
    pub fn host_mut(&mut self) -> &mut ManualHost {
        self.lp.host_mut()
    }

    /// The scripted simulation.
    #[must_use]
    pub fn simulation(&self) -> &ScriptedSimulation {
        self.lp.driver().simulation()
    }

    /// Frames drawn through this harness.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Commands of frame `index`.
    #[must_use]
    pub fn frame(&self, index: usize) -> &[DrawCommand] {
        &self.frames[index]
    }

    /// Commands of the most recent frame.
    #[must_use]
    pub fn last_frame(&self) -> &[DrawCommand] {
        self.frames.last().map_or(&[], Vec::as_slice)
    }

    /// Reports, one per frame.
    #[must_use]
    pub fn reports(&self) -> &[FrameReport] {
        &self.reports
    }

    /// Circles filled in frame `index`, in paint order.
    #[must_use]
    pub fn circles(&self, index: usize) -> Vec<FilledCircle> {
        circles_in(self.frame(index))
    }

    /// Replay frame `index` onto a fresh pixel surface of the viewport size.
    #[must_use]
    pub fn rasterize(&self, index: usize) -> PixelSurface {
        let surface = self.lp.driver().surface();
        let mut pixels = PixelSurface::new(surface.width(), surface.height());
        draw::replay(self.frame(index), &mut pixels);
        pixels
    }

    // === Assertions ===

    /// Assert the most recent frame filled `expected` circles.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_circle_count(&self, expected: usize) -> &Self {
        let actual = circles_in(self.last_frame()).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} circles in last frame but found {actual}"
        );
        self
    }

    /// Assert every frame opens with a clear before any fill.
    ///
    /// # Panics
    ///
    /// Panics on the first frame whose first command is not a clear.
    pub fn assert_cleared_first(&self) -> &Self {
        for (i, frame) in self.frames.iter().enumerate() {
            assert!(
                frame.first().is_some_and(DrawCommand::is_clear),
                "Expected frame {i} to start with a clear"
            );
            assert_eq!(
                frame.iter().filter(|c| c.is_clear()).count(),
                1,
                "Expected exactly one clear in frame {i}"
            );
        }
        self
    }

    /// Assert how many callbacks are armed.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_pending(&self, expected: usize) -> &Self {
        let actual = self.host().pending().len();
        assert_eq!(
            actual, expected,
            "Expected {expected} pending frames but found {actual}"
        );
        self
    }

    /// Assert the host never held more than one callback.
    ///
    /// # Panics
    ///
    /// Panics if two callbacks were ever armed at once.
    pub fn assert_single_in_flight(&self) -> &Self {
        let max = self.host().max_pending();
        assert!(max <= 1, "Expected at most one pending frame, saw {max}");
        self
    }

    /// Assert how many frames have been drawn.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_frames(&self, expected: usize) -> &Self {
        let actual = self.frame_count();
        assert_eq!(actual, expected, "Expected {expected} frames but drew {actual}");
        self
    }
}
