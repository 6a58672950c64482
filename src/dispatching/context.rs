//! Scheduling context for dispatching rule evaluation.

/// Runtime scheduling state passed to dispatching rules.
///
/// All times are in seconds relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Default)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: i64,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }
}
