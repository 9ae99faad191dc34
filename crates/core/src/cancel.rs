//! Cooperative cancellation for per-row loops.

use crate::error::{Error, Result};
use alloc::boxed::Box;
use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

/// A shared flag that long-running loops poll once per row.
///
/// Clones share the same flag, so one clone can be handed to a watchdog or a signal
/// handler while the query loop holds another. Raising the flag never interrupts work
/// preemptively: the loop notices it on its next check and fails with `Error::Cancelled`.
///
/// A [`child`](CancelFlag::child) flag also reports cancellation once its parent is
/// raised, while raising the child leaves the parent untouched.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    raised: Arc<AtomicBool>,
    parent: Option<Box<CancelFlag>>,
}

impl CancelFlag {
    /// Creates a lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lowered flag that is also raised by `self`.
    pub fn child(&self) -> Self {
        Self {
            raised: Arc::default(),
            parent: Some(Box::new(self.clone())),
        }
    }

    /// Raises the flag.
    pub fn cancel(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Returns true once the flag or one of its parents has been raised.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.raised.load(Ordering::Acquire)
            || self.parent.as_ref().is_some_and(|p| p.is_cancelled())
    }

    /// Fails with `Error::Cancelled` if the flag has been raised.
    #[inline]
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }
}
