//! Query deadline enforcement.

use sift_core::CancelFlag;
use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Raises a cancellation flag once a timeout elapses, unless stopped first.
pub(crate) struct Watchdog {
    stop: Sender<()>,
    handle: JoinHandle<bool>,
}

impl Watchdog {
    pub(crate) fn spawn(timeout: Duration, cancel: CancelFlag) -> io::Result<Self> {
        let (stop, stopped) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("sift-query-watchdog".into())
            .spawn(move || match stopped.recv_timeout(timeout) {
                Err(RecvTimeoutError::Timeout) => {
                    cancel.cancel();
                    true
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => false,
            })?;
        Ok(Self { stop, handle })
    }

    /// Stops the watchdog and reports whether it raised the flag.
    pub(crate) fn finish(self) -> bool {
        // The thread may already have exited after firing.
        let _ = self.stop.send(());
        self.handle.join().unwrap_or(false)
    }
}
