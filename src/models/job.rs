//! Job (process) model.
//!
//! A job is a single CPU burst with an arrival instant and a priority class.
//! Input fields are fixed at construction; start/end/remaining are written
//! by exactly one strategy run over a private copy.
//!
//! # Time Representation
//! All times are integer seconds relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned job identifier.
pub type JobId = i64;

/// Priority class of a job.
///
/// Maps to an ordinal weight where lower = more urgent:
/// High=1, Medium=2, Low=3, anything else=4.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PriorityClass {
    High,
    Medium,
    #[default]
    Low,
    /// Unrecognized label, kept verbatim and served last.
    Other(String),
}

impl PriorityClass {
    /// Parses a label. Never fails: unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            other => Self::Other(other.to_string()),
        }
    }

    /// Ordinal weight (lower = served first).
    pub fn weight(&self) -> i32 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
            Self::Other(_) => 4,
        }
    }

    /// The label this class was built from.
    pub fn label(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for PriorityClass {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<&str> for PriorityClass {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl From<PriorityClass> for String {
    fn from(class: PriorityClass) -> Self {
        class.label().to_string()
    }
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A job to be simulated.
///
/// `start_time`/`end_time` are `None` until a strategy dispatches/completes
/// the job. `remaining_time` starts at `burst_time` and reaches 0 exactly at
/// completion; a serialized record without it deserializes as unserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "JobRecord")]
pub struct Job {
    /// Caller-assigned identifier (unique by convention only).
    pub id: JobId,
    /// Total service units required (> 0).
    pub burst_time: i64,
    /// Instant the job becomes eligible to run (>= 0).
    pub arrival_time: i64,
    /// Priority class.
    pub priority: PriorityClass,
    /// First dispatch instant.
    #[serde(default)]
    pub start_time: Option<i64>,
    /// Completion instant.
    #[serde(default)]
    pub end_time: Option<i64>,
    /// Service units still owed.
    pub remaining_time: i64,
}

/// Wire form of [`Job`] with optional output fields.
#[derive(Deserialize)]
struct JobRecord {
    id: JobId,
    burst_time: i64,
    #[serde(default)]
    arrival_time: i64,
    #[serde(default)]
    priority: PriorityClass,
    #[serde(default)]
    start_time: Option<i64>,
    #[serde(default)]
    end_time: Option<i64>,
    #[serde(default)]
    remaining_time: Option<i64>,
}

impl From<JobRecord> for Job {
    fn from(record: JobRecord) -> Self {
        Self {
            id: record.id,
            burst_time: record.burst_time,
            arrival_time: record.arrival_time,
            priority: record.priority,
            start_time: record.start_time,
            end_time: record.end_time,
            remaining_time: record.remaining_time.unwrap_or(record.burst_time),
        }
    }
}

impl Job {
    /// Creates a job arriving at t=0 with `Low` priority.
    pub fn new(id: JobId, burst_time: i64) -> Self {
        Self {
            id,
            burst_time,
            arrival_time: 0,
            priority: PriorityClass::Low,
            start_time: None,
            end_time: None,
            remaining_time: burst_time,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the priority class.
    pub fn with_priority(mut self, priority: impl Into<PriorityClass>) -> Self {
        self.priority = priority.into();
        self
    }

    /// A fresh record with the same input fields and reset outputs.
    ///
    /// The source is left untouched.
    pub fn fresh_copy(&self) -> Self {
        Self {
            id: self.id,
            burst_time: self.burst_time,
            arrival_time: self.arrival_time,
            priority: self.priority.clone(),
            start_time: None,
            end_time: None,
            remaining_time: self.burst_time,
        }
    }

    /// Ordinal weight of the priority class.
    #[inline]
    pub fn priority_weight(&self) -> i32 {
        self.priority.weight()
    }

    /// Whether the job has been dispatched at least once.
    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the job has received all of its service.
    pub fn is_complete(&self) -> bool {
        self.end_time.is_some() && self.remaining_time == 0
    }

    /// Start time with `-1` standing for "unset".
    pub fn start_or_unset(&self) -> i64 {
        self.start_time.unwrap_or(-1)
    }

    /// End time with `-1` standing for "unset".
    pub fn end_or_unset(&self) -> i64 {
        self.end_time.unwrap_or(-1)
    }

    /// Turnaround time (end - arrival), once complete.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.end_time.map(|end| end - self.arrival_time)
    }

    /// Waiting time (turnaround - burst), once complete.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// Response time (first dispatch - arrival), once started.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|start| start - self.arrival_time)
    }
}
