//! Scheduling strategies, simulator facade and KPI evaluation.
//!
//! Each strategy consumes a private working copy of the job set and
//! returns it with start/end/remaining populated, in its display order.
//!
//! # Algorithms
//!
//! | Strategy | Preemptive | Selection | Display order |
//! |----------|-----------|-----------|---------------|
//! | FCFS | no | arrival order | arrival |
//! | SJF | no | shortest burst among arrived | burst |
//! | Priority | no | lowest class weight among arrived | class weight |
//! | Round-Robin | yes | FIFO queue, fixed quantum | arrival |
//!
//! All strategies share one skeleton: a clock starting at 0, an admission
//! index into the arrival-sorted jobs, and a jump straight to the next
//! arrival whenever the ready structure is empty.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod fcfs;
mod kpi;
mod nonpreemptive;
mod outcome;
mod round_robin;
mod simulator;

pub use fcfs::run_fcfs;
pub use kpi::ScheduleKpi;
pub use nonpreemptive::{run_priority, run_priority_with, run_sjf, run_sjf_with};
pub use outcome::{ReportRow, ScheduleOutcome};
pub use round_robin::run_round_robin;
pub use simulator::{Comparison, Simulator};

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::Job;

/// Round-Robin quantum used when a strategy is selected by name only.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Scheduling discipline selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Priority class (non-preemptive).
    Priority,
    /// Round-Robin with a fixed quantum.
    RoundRobin { quantum: i64 },
}

impl Strategy {
    /// All four disciplines, Round-Robin using `quantum`.
    pub fn all(quantum: i64) -> [Strategy; 4] {
        [
            Strategy::Fcfs,
            Strategy::Sjf,
            Strategy::Priority,
            Strategy::RoundRobin { quantum },
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Fcfs => "FCFS",
            Strategy::Sjf => "SJF",
            Strategy::Priority => "Priority",
            Strategy::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Quantum, for Round-Robin.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Strategy::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }

    /// Whether the discipline may interrupt a running job.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Strategy::RoundRobin { .. })
    }

    /// Parses a strategy name, using `quantum` if it names Round-Robin.
    ///
    /// Accepts the display names case-insensitively, plus `rr` and
    /// `round-robin`.
    pub fn parse_with_quantum(name: &str, quantum: i64) -> Result<Self, ScheduleError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Strategy::Fcfs),
            "sjf" => Ok(Strategy::Sjf),
            "priority" => Ok(Strategy::Priority),
            "round robin" | "round-robin" | "round_robin" | "rr" => {
                Ok(Strategy::RoundRobin { quantum })
            }
            _ => Err(ScheduleError::UnknownStrategy(name.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::RoundRobin { quantum } => write!(f, "Round Robin (q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Strategy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_quantum(s, DEFAULT_QUANTUM)
    }
}

/// Stable sort by arrival time; ties keep input order.
pub(crate) fn sort_by_arrival(jobs: &mut [Job]) {
    jobs.sort_by_key(|j| j.arrival_time);
}

/// Advances the admission index past every job arrived by `time`.
///
/// Returns the indices newly admitted, in arrival order.
pub(crate) fn admit_arrived(jobs: &[Job], next_arrival: &mut usize, time: i64) -> Range<usize> {
    let first = *next_arrival;
    while *next_arrival < jobs.len() && jobs[*next_arrival].arrival_time <= time {
        *next_arrival += 1;
    }
    first..*next_arrival
}
