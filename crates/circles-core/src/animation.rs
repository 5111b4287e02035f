//! Animation loop: run one frame, then ask the host for the next one.
//!
//! The loop holds at most one pending frame handle. `on_frame` consumes the
//! handle before drawing and re-arms only after drawing, so a frame can never
//! overlap the next and the host never holds two callbacks for one loop.

use tracing::{info, warn};

use crate::driver::{FrameDriver, FrameReport};
use crate::error::LoopError;
use crate::{Simulation, Surface};

/// The host's "call me before the next display refresh" primitive.
pub trait FrameHost {
    /// Identifies one armed callback.
    type Handle;

    /// Arm one callback for the next display frame.
    fn request_frame(&mut self) -> Result<Self::Handle, LoopError>;

    /// Disarm a callback that has not fired yet.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// A [`FrameDriver`] bound to a [`FrameHost`] with a single pending slot.
pub struct AnimationLoop<S, C, H: FrameHost> {
    driver: FrameDriver<S, C>,
    host: H,
    pending: Option<H::Handle>,
    last_report: Option<FrameReport>,
}

impl<S, C, H> AnimationLoop<S, C, H>
where
    S: Simulation,
    C: Surface,
    H: FrameHost,
{
    /// Create a stopped loop.
    pub const fn new(driver: FrameDriver<S, C>, host: H) -> Self {
        Self {
            driver,
            host,
            pending: None,
            last_report: None,
        }
    }

    /// Arm the first frame.
    ///
    /// # Errors
    ///
    /// [`LoopError::AlreadyRunning`] if a frame is already pending (nothing
    /// new is armed), or the host's scheduling error.
    pub fn start(&mut self) -> Result<(), LoopError> {
        if self.pending.is_some() {
            return Err(LoopError::AlreadyRunning);
        }
        self.pending = Some(self.host.request_frame()?);
        info!(
            records = self.driver.layout().record_count(),
            stride = self.driver.layout().stride_length(),
            "animation started"
        );
        Ok(())
    }

    /// Handle a fired frame callback: draw one frame, then re-arm.
    ///
    /// A callback that arrives with nothing pending (after [`stop`](Self::stop),
    /// or a duplicate) draws nothing and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// The host's scheduling error. The frame has already been drawn and the
    /// loop is left stopped.
    pub fn on_frame(&mut self) -> Result<Option<FrameReport>, LoopError> {
        if self.pending.take().is_none() {
            warn!("frame callback fired with no pending frame; ignoring");
            return Ok(None);
        }

        let report = self.driver.render_frame();
        self.last_report = Some(report);
        self.pending = Some(self.host.request_frame()?);
        Ok(Some(report))
    }

    /// Cancel the pending frame, if any. Returns whether one was pending.
    pub fn stop(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                self.host.cancel_frame(handle);
                info!(frames = self.driver.frames(), "animation stopped");
                true
            }
            None => false,
        }
    }

    /// Check if a frame is pending.
    pub const fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Frames drawn so far.
    pub const fn frames_rendered(&self) -> u64 {
        self.driver.frames()
    }

    /// Report of the most recent frame.
    pub const fn last_report(&self) -> Option<FrameReport> {
        self.last_report
    }

    /// The frame driver.
    pub const fn driver(&self) -> &FrameDriver<S, C> {
        &self.driver
    }

    /// Mutable access to the frame driver.
    pub fn driver_mut(&mut self) -> &mut FrameDriver<S, C> {
        &mut self.driver
    }

    /// The frame host.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the frame host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<S, C, H> std::fmt::Debug for AnimationLoop<S, C, H>
where
    H: FrameHost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationLoop")
            .field("running", &self.pending.is_some())
            .field("last_report", &self.last_report)
            .finish_non_exhaustive()
    }
}
