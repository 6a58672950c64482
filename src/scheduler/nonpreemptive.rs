//! Non-preemptive ready-queue strategies: Shortest-Job-First and Priority.
//!
//! # Algorithm
//!
//! 1. Sort jobs by arrival (stable).
//! 2. At each decision point, admit every job with `arrival <= time`.
//! 3. If nothing is ready, jump the clock to the next arrival.
//! 4. Otherwise select one ready job with the rule engine and run it to
//!    completion; later arrivals never interrupt it.
//!
//! Ties on the primary key go to the earlier arrival, then to the
//! configured final tie-breaker (input order by default).
//!
//! # Complexity
//! O(n²) selections over a ready list of at most n jobs.

use super::{admit_arrived, sort_by_arrival, ScheduleOutcome, Strategy};
use crate::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
use crate::error::ScheduleError;
use crate::models::{Job, Slice, Timeline};
use crate::validation::validate_jobs;

/// Runs Shortest-Job-First with FIFO among equal bursts.
pub fn run_sjf(jobs: Vec<Job>) -> Result<ScheduleOutcome, ScheduleError> {
    run_sjf_with(jobs, TieBreaker::default())
}

/// Runs Shortest-Job-First with a custom final tie-breaker.
///
/// Display order is ascending burst time (stable over arrival order),
/// independent of execution order.
pub fn run_sjf_with(
    jobs: Vec<Job>,
    tie_breaker: TieBreaker,
) -> Result<ScheduleOutcome, ScheduleError> {
    let engine = RuleEngine::new()
        .with_rule(rules::Spt)
        .with_tie_breaker(rules::Fifo)
        .with_final_tie_breaker(tie_breaker);

    let mut outcome = simulate(jobs, Strategy::Sjf, &engine)?;
    outcome.jobs.sort_by_key(|j| j.burst_time);
    Ok(outcome)
}

/// Runs Priority scheduling with FIFO among equal classes.
pub fn run_priority(jobs: Vec<Job>) -> Result<ScheduleOutcome, ScheduleError> {
    run_priority_with(jobs, TieBreaker::default())
}

/// Runs Priority scheduling with a custom final tie-breaker.
///
/// Display order is ascending class weight (stable over arrival order),
/// independent of execution order.
pub fn run_priority_with(
    jobs: Vec<Job>,
    tie_breaker: TieBreaker,
) -> Result<ScheduleOutcome, ScheduleError> {
    let engine = RuleEngine::new()
        .with_rule(rules::PriorityClassRule)
        .with_tie_breaker(rules::Fifo)
        .with_final_tie_breaker(tie_breaker);

    let mut outcome = simulate(jobs, Strategy::Priority, &engine)?;
    outcome.jobs.sort_by_key(Job::priority_weight);
    Ok(outcome)
}

/// Shared run-to-completion loop. Returns jobs in arrival order.
fn simulate(
    mut jobs: Vec<Job>,
    strategy: Strategy,
    engine: &RuleEngine,
) -> Result<ScheduleOutcome, ScheduleError> {
    validate_jobs(&jobs)?;
    if jobs.is_empty() {
        return Ok(ScheduleOutcome::empty(strategy));
    }

    sort_by_arrival(&mut jobs);

    let mut time: i64 = 0;
    let mut next_arrival = 0;
    let mut steps = 0;
    let mut ready: Vec<usize> = Vec::new();
    let mut timeline = Timeline::new();
    let mut execution_order = Vec::with_capacity(jobs.len());

    while next_arrival < jobs.len() || !ready.is_empty() {
        ready.extend(admit_arrived(&jobs, &mut next_arrival, time));
        steps += 1;

        let context = SchedulingContext::at_time(time);
        match engine.select_among(&jobs, &ready, &context) {
            None => {
                let next = jobs[next_arrival].arrival_time;
                tracing::debug!(from = time, to = next, "idle until next arrival");
                time = next;
            }
            Some(pos) => {
                let idx = ready.remove(pos);
                let job = &mut jobs[idx];
                let start = time;
                time += job.burst_time;
                job.start_time = Some(start);
                job.end_time = Some(time);
                job.remaining_time = 0;

                tracing::debug!(job_id = job.id, start, end = time, "dispatched");
                timeline.push(Slice::new(job.id, start, time));
                execution_order.push(job.id);
            }
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
