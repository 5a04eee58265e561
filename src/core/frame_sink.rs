//! The hand-off point between the engine and whatever displays its frames.

use crate::engine_state::voxels::cube::Frame;

/// Consumer of finished frames, typically the hardware scanning layer.
///
/// The engine hands over one frame per outer tick. The frame is a copy, so the sink
/// never observes a cube that is half way through an animation step.
pub trait FrameSink {
    /// Receives the frame produced by the current tick.
    fn consume(&mut self, frame: &Frame);
}

/// A [`FrameSink`] that writes each frame's scan packets to the log at `trace` level.
///
/// Used by the native binary when no hardware is attached.
#[derive(Debug, Default)]
pub struct LoggingFrameSink {
    frames_seen: u64,
}

impl LoggingFrameSink {
    /// Creates a sink that has not seen any frames yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames consumed so far.
    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }
}

impl FrameSink for LoggingFrameSink {
    fn consume(&mut self, frame: &Frame) {
        self.frames_seen += 1;
        if log::log_enabled!(log::Level::Trace) {
            for packet in frame.layer_packets() {
                log::trace!("frame {} layer {:#04x}: {:02x?}", self.frames_seen, packet[0], &packet[1..]);
            }
        }
    }
}
