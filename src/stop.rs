//! Cancellation token shared between the UI loop and the frame reader.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable stop flag.
///
/// The UI thread calls [`StopToken::stop`] when the window closes; the reader
/// polls [`StopToken::is_stopped`] once per line read. All clones observe the
/// same flag, and once set it stays set.
#[derive(Clone, Debug, Default)]
pub struct StopToken {
    stopped: Arc<AtomicBool>,
}

impl StopToken {
    /// Create a token in the running state.
    pub fn new() -> Self { Self::default() }

    /// Request that every holder of this token stop.
    pub fn stop(&self) { self.stopped.store(true, Ordering::Release); }

    /// Whether a stop has been requested.
    #[inline]
    pub fn is_stopped(&self) -> bool { self.stopped.load(Ordering::Acquire) }
}
