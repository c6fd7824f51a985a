//! Shared bookkeeping for background image resolution.

/// Counts resolution workers that have not yet reported back.
///
/// Only the counter is shared; results come through a channel.
/// This struct is wrapped in an `Arc<Mutex<>>` so workers can decrement it.
pub struct ResolutionState {
    /// Number of panels whose candidates are still being attempted
    pub in_flight: usize,
}

impl ResolutionState {
    /// Creates a state with no workers running.
    pub fn new() -> Self {
        Self { in_flight: 0 }
    }
}

impl Default for ResolutionState {
    fn default() -> Self {
        Self::new()
    }
}
