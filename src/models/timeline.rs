//! Execution timeline model.
//!
//! A timeline is the chronological list of service slices a strategy
//! granted on the single simulated processor. Non-preemptive strategies
//! produce one slice per job; Round-Robin may produce several.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::JobId;

/// A contiguous interval `[start, end)` during which one job held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Job that ran.
    pub job_id: JobId,
    /// Slice start (inclusive).
    pub start: i64,
    /// Slice end (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(job_id: JobId, start: i64, end: i64) -> Self {
        Self { job_id, start, end }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether two slices share any instant.
    #[inline]
    pub fn overlaps(&self, other: &Slice) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// All slices of one simulation run, in the order they executed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Executed slices.
    pub slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: Slice) {
        debug_assert!(slice.end > slice.start, "empty slice for job {}", slice.job_id);
        self.slices.push(slice);
    }

    /// Latest slice end (0 when nothing ran).
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// All slices for a job, in execution order.
    pub fn slices_for_job(&self, job_id: JobId) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.job_id == job_id).collect()
    }

    /// Total service a job received across its slices.
    pub fn service_for_job(&self, job_id: JobId) -> i64 {
        self.slices_for_job(job_id).iter().map(|s| s.duration()).sum()
    }

    /// Service totals for every job that ran.
    pub fn service_by_job(&self) -> HashMap<JobId, i64> {
        let mut totals: HashMap<JobId, i64> = HashMap::new();
        for s in &self.slices {
            *totals.entry(s.job_id).or_insert(0) += s.duration();
        }
        totals
    }

    /// Whether any two slices overlap.
    pub fn has_overlap(&self) -> bool {
        let mut sorted: Vec<&Slice> = self.slices.iter().collect();
        sorted.sort_by_key(|s| s.start);
        sorted.windows(2).any(|w| w[0].overlaps(w[1]))
    }

    /// Number of dispatches (one per slice).
    pub fn dispatch_count(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing ran.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
