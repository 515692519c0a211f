/// Dirty flag plus at most one outstanding frame request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameScheduler {
    dirty: bool,
    frame_pending: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a state change. Returns `true` when the caller must request a frame.
    pub fn mark_dirty(&mut self) -> bool {
        self.dirty = true;
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Consume the pending frame. Returns `true` when there is work to do.
    pub fn begin_frame(&mut self) -> bool {
        self.frame_pending = false;
        std::mem::take(&mut self.dirty)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scheduler.rs"]
mod tests;
