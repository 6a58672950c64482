//! Synthetic workload generation.
//!
//! Produces reproducible job sets for comparing strategies. The same seed
//! and parameters always yield the same jobs.
//!
//! # Example
//! ```
//! use u_cpusched::workload::WorkloadGenerator;
//!
//! let jobs = WorkloadGenerator::new(7)
//!     .with_burst_range(1, 10)
//!     .with_arrival_range(0, 20)
//!     .generate(5)
//!     .unwrap();
//! assert_eq!(jobs.len(), 5);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::ScheduleError;
use crate::models::{Job, PriorityClass};

/// Seeded generator of random job sets.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    min_burst: i64,
    max_burst: i64,
    min_arrival: i64,
    max_arrival: i64,
}

impl WorkloadGenerator {
    /// Creates a generator with bursts in 1..=10 and arrivals in 0..=50.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            min_burst: 1,
            max_burst: 10,
            min_arrival: 0,
            max_arrival: 50,
        }
    }

    /// Sets the inclusive burst-time range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }

    /// Sets the inclusive arrival-time range.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.min_arrival = min;
        self.max_arrival = max;
        self
    }

    /// Generates `count` jobs with IDs `1..=count`.
    ///
    /// Priorities are drawn uniformly from High, Medium and Low.
    pub fn generate(&self, count: usize) -> Result<Vec<Job>, ScheduleError> {
        self.check_ranges()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let jobs = (1..=count)
            .map(|id| {
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                let arrival = rng.random_range(self.min_arrival..=self.max_arrival);
                let priority = match rng.random_range(0..3) {
                    0 => PriorityClass::High,
                    1 => PriorityClass::Medium,
                    _ => PriorityClass::Low,
                };
                Job::new(id as i64, burst)
                    .with_arrival(arrival)
                    .with_priority(priority)
            })
            .collect();

        Ok(jobs)
    }

    fn check_ranges(&self) -> Result<(), ScheduleError> {
        if self.min_burst < 1 || self.min_burst > self.max_burst {
            return Err(ScheduleError::Config(format!(
                "burst range {}..={} must be non-empty and start at 1 or more",
                self.min_burst, self.max_burst
            )));
        }
        if self.min_arrival < 0 || self.min_arrival > self.max_arrival {
            return Err(ScheduleError::Config(format!(
                "arrival range {}..={} must be non-empty and non-negative",
                self.min_arrival, self.max_arrival
            )));
        }
        Ok(())
    }
}
