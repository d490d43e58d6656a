/// Coalesces a burst of values into the single most recent one.
///
/// This is the "cancel and reschedule" policy around animation frames:
/// every [`schedule`](Self::schedule) replaces whatever was pending, and the
/// consumer [`take`](Self::take)s at most one value per frame. Dropping or
/// [`cancel`](Self::cancel)ing the coalescer guarantees an in-flight value
/// never fires after teardown.
#[derive(Debug, Default)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Stores `value` as the pending update, canceling any previous one.
    /// Returns `true` when a pending value was replaced.
    pub fn schedule(&mut self, value: T) -> bool {
        self.pending.replace(value).is_some()
    }

    /// Removes and returns the latest pending value, if any.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drops the pending value without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
#[path = "tests/frame_tests.rs"]
mod tests;
