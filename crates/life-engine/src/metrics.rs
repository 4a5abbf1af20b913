//! Per-run counters for the simulation driver.

/// Counters accumulated since driver construction or the last reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Transitions applied through the driver.
    pub steps_taken: u64,
    /// Every observation of an already-seen state, including repeats
    /// after the first detection has latched.
    pub loop_detections: u64,
    /// Times the seen-state table hit capacity and was reseeded.
    pub reseed_events: u64,
    /// Largest seen-state table size observed.
    pub peak_seen_states: usize,
}
