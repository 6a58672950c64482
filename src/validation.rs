//! Input validation for simulation runs.
//!
//! Checks a job set (and, for Round-Robin, the quantum) before any job is
//! copied or mutated. Detects:
//! - Non-positive burst times
//! - Negative arrival times
//! - Non-positive quanta
//! - Job sets whose completion time would not fit the clock
//!
//! Unknown priority labels are not errors: they fall back to the lowest
//! urgency class. Duplicate job IDs are allowed but logged.

use std::collections::HashSet;

use crate::models::{Job, JobId};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A job's burst time is zero or negative.
    InvalidBurstTime,
    /// A job arrives before t=0.
    InvalidArrivalTime,
    /// Round-Robin quantum is zero or negative.
    InvalidQuantum,
    /// Latest arrival plus total burst exceeds the representable clock.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a job set.
///
/// Checks:
/// 1. Every burst time is positive
/// 2. Every arrival time is non-negative
/// 3. The latest arrival plus the total burst fits in an `i64`, which
///    bounds every clock value a strategy can reach
///
/// An empty job set is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    for job in jobs {
        if job.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!("Job {} has non-positive burst time {}", job.id, job.burst_time),
            ));
        }

        if job.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!("Job {} has negative arrival time {}", job.id, job.arrival_time),
            ));
        }

    }

    if errors.is_empty() && completion_bound(jobs).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the clock",
        ));
    }

    for id in duplicate_ids(jobs) {
        tracing::warn!(job_id = id, "duplicate job id in job set");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the clock: latest arrival plus the sum of all bursts.
///
/// `None` when the bound does not fit in an `i64`.
fn completion_bound(jobs: &[Job]) -> Option<i64> {
    let latest = jobs.iter().map(|j| j.arrival_time).max().unwrap_or(0);
    jobs.iter()
        .try_fold(0_i64, |total, j| total.checked_add(j.burst_time))?
        .checked_add(latest)
}

/// IDs that occur more than once, each reported once in first-repeat order.
pub fn duplicate_ids(jobs: &[Job]) -> Vec<JobId> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    jobs.iter()
        .filter(|j| !seen.insert(j.id) && reported.insert(j.id))
        .map(|j| j.id)
        .collect()
}

/// Validates a Round-Robin quantum (must be >= 1).
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum >= 1 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be at least 1, got {quantum}"),
        )])
    }
}

/// Validates a job set together with an optional quantum.
///
/// Collects problems from both checks.
pub fn validate_input(jobs: &[Job], quantum: Option<i64>) -> ValidationResult {
    let mut errors = validate_jobs(jobs).err().unwrap_or_default();
    if let Some(q) = quantum {
        if let Err(mut quantum_errors) = validate_quantum(q) {
            errors.append(&mut quantum_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new(1, 5).with_arrival(0).with_priority("High"),
            Job::new(2, 3).with_arrival(2).with_priority("Low"),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_jobs(&sample_jobs()).is_ok());
        assert!(validate_input(&sample_jobs(), Some(2)).is_ok());
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(validate_jobs(&[]).is_ok());
    }

    #[test]
    fn test_zero_burst() {
        let jobs = vec![Job::new(1, 0)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBurstTime);
        assert!(errors[0].message.contains("Job 1"));
    }

    #[test]
    fn test_negative_arrival() {
        let jobs = vec![Job::new(4, 2).with_arrival(-1)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidArrivalTime));
    }

    #[test]
    fn test_invalid_quantum() {
        for q in [0, -3] {
            let errors = validate_quantum(q).unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
        }
        assert!(validate_quantum(1).is_ok());
    }

    #[test]
    fn test_unknown_priority_is_not_an_error() {
        let jobs = vec![Job::new(1, 2).with_priority("Critical")];
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_duplicate_ids_allowed() {
        let jobs = vec![Job::new(1, 2), Job::new(1, 3)];
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let jobs = vec![Job::new(1, 2), Job::new(2, 1), Job::new(1, 3), Job::new(1, 4)];
        assert_eq!(duplicate_ids(&jobs), vec![1]);
        assert!(duplicate_ids(&sample_jobs()).is_empty());
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let jobs = vec![Job::new(1, i64::MAX), Job::new(2, 1)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let late = vec![Job::new(1, 2).with_arrival(i64::MAX - 1)];
        assert_eq!(
            validate_jobs(&late).unwrap_err()[0].kind,
            ValidationErrorKind::TimeOverflow
        );

        let exact = vec![Job::new(1, 2).with_arrival(i64::MAX - 2)];
        assert!(validate_jobs(&exact).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        // Bad burst + bad arrival + bad quantum
        let jobs = vec![Job::new(1, -2), Job::new(2, 1).with_arrival(-5)];
        let errors = validate_input(&jobs, Some(0)).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
