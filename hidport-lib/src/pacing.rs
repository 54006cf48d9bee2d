use std::time::Duration;

/// Protocol-mandated pacing for the transport core.
///
/// The relative ordering is contractual: sleep `frame_delay` before every
/// frame write, sleep `settle_delay` once after the last write, and sleep
/// `read_interval` before every read attempt. Tests shrink the durations to
/// zero with [`Pacing::immediate`]; the ordering stays the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause before each frame write, respects device intake timing
    pub frame_delay: Duration,
    /// Pause after the last write, lets the device process the command
    pub settle_delay: Duration,
    /// Pause before each read attempt
    pub read_interval: Duration,
    /// Read polls before giving up on a terminator
    pub max_read_attempts: usize,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(50),
            settle_delay: Duration::from_millis(250),
            read_interval: Duration::from_millis(150),
            max_read_attempts: 100,
        }
    }
}

impl Pacing {
    /// Pacing with every delay zeroed. The attempt budget is kept; only the
    /// wall-clock waits disappear.
    pub fn immediate() -> Self {
        Self {
            frame_delay: Duration::ZERO,
            settle_delay: Duration::ZERO,
            read_interval: Duration::ZERO,
            ..Self::default()
        }
    }
}
