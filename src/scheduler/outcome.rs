//! Result of one strategy run.
//!
//! The outcome is structured data; report lines and export rows are pure
//! projections over it.

use serde::{Deserialize, Serialize};

use super::Strategy;
use crate::models::{Job, JobId, PriorityClass, Timeline};

/// Output of a single simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Strategy that produced this outcome.
    pub strategy: Strategy,
    /// Working copy of the jobs, in the strategy's display order.
    pub jobs: Vec<Job>,
    /// Job IDs in order of first dispatch.
    pub execution_order: Vec<JobId>,
    /// Every executed slice, chronologically.
    pub timeline: Timeline,
    /// Scheduling decision points taken (dispatches and idle jumps).
    pub steps: usize,
}

/// One exported record per started job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: JobId,
    pub arrival_time: i64,
    pub burst_time: i64,
    pub priority: PriorityClass,
    pub start_time: i64,
    pub end_time: i64,
}

impl ScheduleOutcome {
    pub(crate) fn new(
        strategy: Strategy,
        jobs: Vec<Job>,
        execution_order: Vec<JobId>,
        timeline: Timeline,
        steps: usize,
    ) -> Self {
        debug_assert!(jobs.iter().all(Job::is_complete), "{strategy}: incomplete job");

        let outcome = Self {
            strategy,
            jobs,
            execution_order,
            timeline,
            steps,
        };
        tracing::info!(
            strategy = %outcome.strategy,
            jobs = outcome.jobs.len(),
            makespan = outcome.makespan(),
            steps = outcome.steps,
            "simulation finished"
        );
        outcome
    }

    /// An outcome for an empty job set.
    pub fn empty(strategy: Strategy) -> Self {
        Self {
            strategy,
            jobs: Vec::new(),
            execution_order: Vec::new(),
            timeline: Timeline::new(),
            steps: 0,
        }
    }

    /// Whether no job was scheduled.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Finds a job by ID.
    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Job IDs in display order.
    pub fn display_order(&self) -> Vec<JobId> {
        self.jobs.iter().map(|j| j.id).collect()
    }

    /// Completion time of the last job.
    pub fn makespan(&self) -> i64 {
        self.timeline.makespan()
    }

    /// Heading line for a textual report.
    pub fn title(&self) -> String {
        format!("--- {} Scheduling ---", self.strategy.name())
    }

    /// Report lines with times printed as integer seconds.
    pub fn report_lines(&self) -> Vec<String> {
        self.report_lines_with(|seconds| seconds.to_string())
    }

    /// Report lines, one per job in display order.
    ///
    /// `format_time` converts a simulated-time offset to display text.
    pub fn report_lines_with<F>(&self, format_time: F) -> Vec<String>
    where
        F: Fn(i64) -> String,
    {
        self.jobs
            .iter()
            .map(|job| {
                format!(
                    "Job {} ({}) started at: {}, finished at: {}",
                    job.id,
                    job.priority,
                    format_time(job.start_or_unset()),
                    format_time(job.end_or_unset()),
                )
            })
            .collect()
    }

    /// Export rows for every started job, in display order.
    pub fn rows(&self) -> Vec<ReportRow> {
        self.jobs
            .iter()
            .filter_map(|job| {
                let start_time = job.start_time?;
                Some(ReportRow {
                    id: job.id,
                    arrival_time: job.arrival_time,
                    burst_time: job.burst_time,
                    priority: job.priority.clone(),
                    start_time,
                    end_time: job.end_or_unset(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::run_fcfs;

    fn sample_outcome() -> ScheduleOutcome {
        let jobs = vec![
            Job::new(1, 5).with_arrival(0).with_priority("High"),
            Job::new(2, 1).with_arrival(2).with_priority("Low"),
        ];
        run_fcfs(jobs).unwrap()
    }

    #[test]
    fn test_report_lines() {
        let outcome = sample_outcome();
        assert_eq!(outcome.title(), "--- FCFS Scheduling ---");
        assert_eq!(
            outcome.report_lines(),
            vec![
                "Job 1 (High) started at: 0, finished at: 5",
                "Job 2 (Low) started at: 5, finished at: 6",
            ]
        );
    }

    #[test]
    fn test_report_lines_with_formatter() {
        let outcome = sample_outcome();
        let lines = outcome.report_lines_with(|s| format!("00:00:{s:02}"));
        assert_eq!(lines[1], "Job 2 (Low) started at: 00:00:05, finished at: 00:00:06");
    }

    #[test]
    fn test_rows() {
        let outcome = sample_outcome();
        let rows = outcome.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            ReportRow {
                id: 2,
                arrival_time: 2,
                burst_time: 1,
                priority: PriorityClass::Low,
                start_time: 5,
                end_time: 6,
            }
        );

        let json = serde_json::to_string(&rows[0]).unwrap();
        assert!(json.contains("\"priority\":\"High\""));
    }

    #[test]
    fn test_rows_skip_unstarted() {
        let mut outcome = ScheduleOutcome::empty(Strategy::Fcfs);
        outcome.jobs.push(Job::new(1, 3));
        assert!(outcome.rows().is_empty());
        assert_eq!(outcome.report_lines()[0], "Job 1 (Low) started at: -1, finished at: -1");
    }

    #[test]
    fn test_empty_outcome() {
        let outcome = ScheduleOutcome::empty(Strategy::Sjf);
        assert!(outcome.is_empty());
        assert_eq!(outcome.makespan(), 0);
        assert!(outcome.report_lines().is_empty());
        assert!(outcome.job(1).is_none());
    }
}
