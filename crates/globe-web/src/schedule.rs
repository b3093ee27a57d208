//! Bookkeeping for a stoppable `requestAnimationFrame` loop, kept free of
//! browser types so it can be tested on the host.

/// Whether the loop may keep running and which frame request is outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopState {
    stopped: bool,
    pending: Option<i32>,
}

impl LoopState {
    /// A requested frame fired. Returns whether that frame should run.
    pub fn begin_tick(&mut self) -> bool {
        self.pending = None;
        !self.stopped
    }

    /// Records the id of a new frame request. Returns `false` when the loop
    /// was stopped meanwhile, in which case the caller cancels `id`.
    pub fn scheduled(&mut self, id: i32) -> bool {
        if self.stopped {
            return false;
        }
        self.pending = Some(id);
        true
    }

    /// Stops the loop, handing back the request to cancel at most once.
    pub fn stop(&mut self) -> Option<i32> {
        self.stopped = true;
        self.pending.take()
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
