//! First-Come-First-Served.
//!
//! Jobs run to completion in ascending arrival order; equal arrivals keep
//! their input order. The execution order is fixed up front, so no ready
//! structure is needed.

use super::{sort_by_arrival, ScheduleOutcome, Strategy};
use crate::error::ScheduleError;
use crate::models::{Job, Slice, Timeline};
use crate::validation::validate_jobs;

/// Runs FCFS over a working copy of the jobs.
///
/// Display order is arrival order, which equals execution order.
pub fn run_fcfs(mut jobs: Vec<Job>) -> Result<ScheduleOutcome, ScheduleError> {
    validate_jobs(&jobs)?;
    if jobs.is_empty() {
        return Ok(ScheduleOutcome::empty(Strategy::Fcfs));
    }

    sort_by_arrival(&mut jobs);

    let mut time: i64 = 0;
    let mut steps = 0;
    let mut timeline = Timeline::new();
    let mut execution_order = Vec::with_capacity(jobs.len());

    for job in jobs.iter_mut() {
        if job.arrival_time > time {
            tracing::debug!(from = time, to = job.arrival_time, "idle until next arrival");
            time = job.arrival_time;
            steps += 1;
        }

        let start = time;
        time += job.burst_time;
        job.start_time = Some(start);
        job.end_time = Some(time);
        job.remaining_time = 0;

        tracing::debug!(job_id = job.id, start, end = time, "dispatched");
        timeline.push(Slice::new(job.id, start, time));
        execution_order.push(job.id);
        steps += 1;
    }

    Ok(ScheduleOutcome::new(
        Strategy::Fcfs,
        jobs,
        execution_order,
        timeline,
        steps,
    ))
}
