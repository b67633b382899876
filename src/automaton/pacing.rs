//! Tick gate that limits generation advancement to a fixed interval.
//!
//! Time is passed in by the caller (seconds since any fixed origin), so the
//! gate never reads a clock itself.

/// Tracks when the last generation was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct TickGate {
    /// Minimum seconds between two generations.
    pub interval: f64,
    /// Time of the last applied generation, or the baseline. `None` until first poll.
    pub last_advance: Option<f64>,
}

impl TickGate {
    pub fn new(interval: f64) -> Self {
        TickGate {
            interval,
            last_advance: None,
        }
    }

    /// Returns true if a generation is due at `current_time`, and if so
    /// records `current_time` as the last advance.
    ///
    /// The first call only records the baseline (unless `interval` is zero).
    /// A `current_time` earlier than the last advance is never due.
    pub fn poll(&mut self, current_time: f64) -> bool {
        let last = *self.last_advance.get_or_insert(current_time);

        if current_time - last >= self.interval {
            self.last_advance = Some(current_time);
            true
        } else {
            false
        }
    }

    /// Forget the baseline so the next poll starts a fresh interval.
    pub fn reset(&mut self) {
        self.last_advance = None;
    }
}
