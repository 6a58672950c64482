//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling performance indicators from a
//! completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Waiting | mean(end - arrival - burst) |
//! | Avg Turnaround | mean(end - arrival) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | CPU Utilization | busy time / (makespan - earliest arrival) |
//! | Dispatches | Number of executed slices |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::ScheduleOutcome;

/// Run performance indicators.
///
/// All time values are in simulated seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Mean time spent ready but not running.
    pub avg_waiting_time: f64,
    /// Mean time from arrival to completion.
    pub avg_turnaround_time: f64,
    /// Mean time from arrival to first dispatch.
    pub avg_response_time: f64,
    /// Fraction of the active horizon the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Number of executed slices.
    pub dispatch_count: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed outcome.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let makespan = outcome.makespan();
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_response: i64 = 0;
        let mut counted: usize = 0;

        for job in &outcome.jobs {
            if let (Some(waiting), Some(turnaround), Some(response)) =
                (job.waiting_time(), job.turnaround_time(), job.response_time())
            {
                total_waiting += waiting;
                total_turnaround += turnaround;
                total_response += response;
                counted += 1;
            }
        }

        let mean = |total: i64| {
            if counted == 0 {
                0.0
            } else {
                total as f64 / counted as f64
            }
        };

        let first_arrival = outcome.jobs.iter().map(|j| j.arrival_time).min().unwrap_or(0);
        let horizon = makespan - first_arrival;
        let cpu_utilization = if horizon <= 0 {
            0.0
        } else {
            outcome.timeline.busy_time() as f64 / horizon as f64
        };

        Self {
            makespan,
            avg_waiting_time: mean(total_waiting),
            avg_turnaround_time: mean(total_turnaround),
            avg_response_time: mean(total_response),
            cpu_utilization,
            dispatch_count: outcome.timeline.dispatch_count(),
        }
    }

    /// Context switches between distinct slices (dispatches - 1).
    pub fn context_switches(&self) -> usize {
        self.dispatch_count.saturating_sub(1)
    }
}
