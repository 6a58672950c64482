//! Round-Robin (preemptive).
//!
//! # Algorithm
//!
//! 1. Admit arrived jobs to the tail of a FIFO queue, in arrival order.
//! 2. If the queue is empty, jump the clock to the next arrival.
//! 3. Dequeue the head and run it for `min(quantum, remaining)`.
//!    Its start time is fixed at its first slice only.
//! 4. Admit jobs that arrived during the slice **before** re-queueing the
//!    preempted job, so newcomers run ahead of it.
//! 5. Re-queue the job if work remains; otherwise record its end time.

use std::collections::VecDeque;

use super::{admit_arrived, sort_by_arrival, ScheduleOutcome, Strategy};
use crate::error::ScheduleError;
use crate::models::{Job, Slice, Timeline};
use crate::validation::validate_input;

/// Runs Round-Robin with the given quantum over a working copy of the jobs.
///
/// Display order is arrival order. Fails with an `InvalidQuantum`
/// validation error when `quantum < 1`.
pub fn run_round_robin(mut jobs: Vec<Job>, quantum: i64) -> Result<ScheduleOutcome, ScheduleError> {
    validate_input(&jobs, Some(quantum))?;
    let strategy = Strategy::RoundRobin { quantum };
    if jobs.is_empty() {
        return Ok(ScheduleOutcome::empty(strategy));
    }

    sort_by_arrival(&mut jobs);

    let mut time: i64 = 0;
    let mut next_arrival = 0;
    let mut steps = 0;
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut timeline = Timeline::new();
    let mut execution_order = Vec::with_capacity(jobs.len());

    while next_arrival < jobs.len() || !queue.is_empty() {
        queue.extend(admit_arrived(&jobs, &mut next_arrival, time));
        steps += 1;

        let Some(idx) = queue.pop_front() else {
            let next = jobs[next_arrival].arrival_time;
            tracing::debug!(from = time, to = next, "idle until next arrival");
            time = next;
            continue;
        };

        let job = &mut jobs[idx];
        if job.start_time.is_none() {
            job.start_time = Some(time);
            execution_order.push(job.id);
        }

        let slice = quantum.min(job.remaining_time);
        let start = time;
        time += slice;
        job.remaining_time -= slice;
        debug_assert!(job.remaining_time >= 0, "job {} over-served", job.id);

        tracing::debug!(job_id = job.id, start, end = time, remaining = job.remaining_time, "slice");
        timeline.push(Slice::new(job.id, start, time));

        // Newcomers go ahead of the preempted job
        queue.extend(admit_arrived(&jobs, &mut next_arrival, time));

        let job = &mut jobs[idx];
        if job.remaining_time > 0 {
            queue.push_back(idx);
        } else {
            job.end_time = Some(time);
        }
    }

    Ok(ScheduleOutcome::new(
        strategy,
        jobs,
        execution_order,
        timeline,
        steps,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn make_jobs(arrivals: &[i64], bursts: &[i64]) -> Vec<Job> {
        arrivals
            .iter()
            .zip(bursts)
            .enumerate()
            .map(|(i, (&a, &b))| Job::new(i as i64, b).with_arrival(a))
            .collect()
    }

    #[test]
    fn test_rr_newcomers_before_preempted() {
        // J0 runs 0..2 and is preempted; J1 (t=1) and J2 (t=2) queue ahead of it
        let outcome = run_round_robin(make_jobs(&[0, 1, 2], &[4, 1, 1]), 2).unwrap();

        let j0 = outcome.job(0).unwrap();
        let j1 = outcome.job(1).unwrap();
        let j2 = outcome.job(2).unwrap();
        assert_eq!((j0.start_time, j0.end_time), (Some(0), Some(6)));
        assert_eq!((j1.start_time, j1.end_time), (Some(2), Some(3)));
        assert_eq!((j2.start_time, j2.end_time), (Some(3), Some(4)));

        assert_eq!(
            outcome.timeline.slices,
            vec![
                Slice::new(0, 0, 2),
                Slice::new(1, 2, 3),
                Slice::new(2, 3, 4),
                Slice::new(0, 4, 6),
            ]
        );
        assert_eq!(outcome.execution_order, vec![0, 1, 2]);
    }

    #[test]
    fn test_rr_arrival_at_slice_end_goes_first() {
        // J1 arrives exactly when J0's first slice ends
        let outcome = run_round_robin(make_jobs(&[0, 3], &[6, 2]), 3).unwrap();
        assert_eq!(
            outcome.timeline.slices,
            vec![
                Slice::new(0, 0, 3),
                Slice::new(1, 3, 5),
                Slice::new(0, 5, 8),
            ]
        );
    }

    #[test]
    fn test_rr_start_time_fixed_at_first_slice() {
        let outcome = run_round_robin(make_jobs(&[0, 0], &[5, 5]), 1).unwrap();
        assert_eq!(outcome.job(0).unwrap().start_time, Some(0));
        assert_eq!(outcome.job(1).unwrap().start_time, Some(1));
        assert_eq!(outcome.job(0).unwrap().end_time, Some(9));
        assert_eq!(outcome.job(1).unwrap().end_time, Some(10));
        assert_eq!(outcome.timeline.dispatch_count(), 10);
    }

    #[test]
    fn test_rr_large_quantum_is_fcfs() {
        let outcome = run_round_robin(make_jobs(&[0, 2, 4], &[5, 1, 1]), 100).unwrap();
        let starts: Vec<i64> = outcome.jobs.iter().map(|j| j.start_or_unset()).collect();
        let ends: Vec<i64> = outcome.jobs.iter().map(|j| j.end_or_unset()).collect();
        assert_eq!(starts, vec![0, 5, 6]);
        assert_eq!(ends, vec![5, 6, 7]);
    }

    #[test]
    fn test_rr_display_order_is_arrival() {
        let jobs = vec![
            Job::new(1, 3).with_arrival(4),
            Job::new(2, 3).with_arrival(0),
            Job::new(3, 1).with_arrival(1),
        ];
        let outcome = run_round_robin(jobs, 2).unwrap();
        assert_eq!(outcome.display_order(), vec![2, 3, 1]);
    }

    #[test]
    fn test_rr_service_conserved() {
        let outcome = run_round_robin(make_jobs(&[0, 1, 1, 3], &[7, 4, 2, 5]), 3).unwrap();
        for job in &outcome.jobs {
            assert_eq!(job.remaining_time, 0);
            assert_eq!(outcome.timeline.service_for_job(job.id), job.burst_time);
        }
        assert!(!outcome.timeline.has_overlap());
        assert_eq!(outcome.makespan(), 18);
    }

    #[test]
    fn test_rr_idle_gap() {
        let near = run_round_robin(make_jobs(&[0, 100], &[3, 3]), 2).unwrap();
        let far = run_round_robin(make_jobs(&[0, 1_000_000], &[3, 3]), 2).unwrap();

        assert_eq!(near.job(1).unwrap().start_time, Some(100));
        assert_eq!(near.job(1).unwrap().end_time, Some(103));
        assert_eq!(far.steps, near.steps);
    }

    #[test]
    fn test_rr_invalid_quantum() {
        for quantum in [0, -1] {
            let err = run_round_robin(make_jobs(&[0], &[1]), quantum).unwrap_err();
            assert_eq!(
                err.validation_errors()[0].kind,
                ValidationErrorKind::InvalidQuantum
            );
        }
    }

    #[test]
    fn test_rr_invalid_quantum_on_empty_set() {
        assert!(run_round_robin(Vec::new(), 0).is_err());
        assert!(run_round_robin(Vec::new(), 2).unwrap().is_empty());
    }
}
