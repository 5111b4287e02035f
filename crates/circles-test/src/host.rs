//! A frame host driven by the test instead of a display.

use circles_core::{FrameHost, LoopError};

/// A [`FrameHost`] whose callbacks fire only when the test calls [`fire`].
///
/// It never rejects a second request, so it can observe a loop that arms too
/// many callbacks; `max_pending` records the high-water mark.
///
/// [`fire`]: ManualHost::fire
#[derive(Debug, Default, Clone)]
pub struct ManualHost {
    next_id: u64,
    pending: Vec<u64>,
    requests: usize,
    cancels: usize,
    max_pending: usize,
    refuse: bool,
}

impl ManualHost {
    /// Create a host with nothing armed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the oldest armed callback, returning its handle.
    pub fn fire(&mut self) -> Option<u64> {
        (!self.pending.is_empty()).then(|| self.pending.remove(0))
    }

    /// Make subsequent requests fail, as a torn-down page would.
    pub fn refuse_requests(&mut self, refuse: bool) {
        self.refuse = refuse;
    }

    /// Handles currently armed.
    #[must_use]
    pub fn pending(&self) -> &[u64] {
        &self.pending
    }

    /// Successful requests so far.
    #[must_use]
    pub const fn requests(&self) -> usize {
        self.requests
    }

    /// Cancellations so far.
    #[must_use]
    pub const fn cancels(&self) -> usize {
        self.cancels
    }

    /// Most callbacks ever armed at once.
    #[must_use]
    pub const fn max_pending(&self) -> usize {
        self.max_pending
    }
}

impl FrameHost for ManualHost {
    type Handle = u64;

    fn request_frame(&mut self) -> Result<u64, LoopError> {
        if self.refuse {
            return Err(LoopError::Schedule("host refused frame request".to_string()));
        }
        self.next_id += 1;
        self.requests += 1;
        self.pending.push(self.next_id);
        self.max_pending = self.max_pending.max(self.pending.len());
        Ok(self.next_id)
    }

    fn cancel_frame(&mut self, handle: u64) {
        self.pending.retain(|h| *h != handle);
        self.cancels += 1;
    }
}
