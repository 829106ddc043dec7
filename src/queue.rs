//! Bounded frame queue from the reader thread to the UI loop.
//!
//! The reader pushes shape-checked frames; the UI loop drains whatever is
//! pending once per tick. Read cadence and render cadence are independent.
//!
//! When the queue is full the incoming frame is dropped. The UI drains every
//! `FRAME_TIME`, so a full queue means the UI thread has stalled and the
//! frame would be stale by the time it was shown anyway.

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};

use crate::frame::RawFrame;

/// Outcome of pushing a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Push {
    /// Frame queued for the UI.
    Queued,
    /// Queue full, frame dropped.
    Dropped,
    /// UI side is gone; the reader should exit.
    Closed,
}

/// Reader-side handle.
#[derive(Clone, Debug)]
pub struct FrameSender {
    tx: Sender<RawFrame>,
}

/// UI-side handle.
#[derive(Debug)]
pub struct FrameReceiver {
    rx: Receiver<RawFrame>,
}

/// Create a queue holding at most `capacity` frames.
pub fn frame_queue(capacity: usize) -> (FrameSender, FrameReceiver) {
    let (tx, rx) = bounded(capacity);
    (FrameSender { tx }, FrameReceiver { rx })
}

impl FrameSender {
    /// Hand a frame to the UI without blocking.
    pub fn push(&self, frame: RawFrame) -> Push {
        match self.tx.try_send(frame) {
            Ok(()) => Push::Queued,
            Err(TrySendError::Full(_)) => Push::Dropped,
            Err(TrySendError::Disconnected(_)) => Push::Closed,
        }
    }
}

impl FrameReceiver {
    /// Take every frame queued so far, oldest first. Never blocks.
    pub fn drain(&self) -> impl Iterator<Item = RawFrame> + '_ { self.rx.try_iter() }

    /// Number of frames currently waiting.
    #[cfg(test)]
    pub fn pending(&self) -> usize { self.rx.len() }
}
