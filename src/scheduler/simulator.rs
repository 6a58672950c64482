//! Simulator facade.
//!
//! Owns the configuration, hands each strategy a freshly copied working set
//! and collects the results. Each strategy validates its copy before
//! touching it, so a job set is checked exactly once per run. The
//! caller's jobs are never mutated, so one canonical job list can be run
//! under any number of strategies.

use super::{
    run_fcfs, run_priority_with, run_round_robin, run_sjf_with, ScheduleKpi, ScheduleOutcome,
    Strategy,
};
use crate::config::SimulationConfig;
use crate::error::ScheduleError;
use crate::models::Job;

/// One strategy's outcome paired with its metrics.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub outcome: ScheduleOutcome,
    pub kpi: ScheduleKpi,
}

/// Runs strategies over private copies of a job set.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Job;
/// use u_cpusched::scheduler::{Simulator, Strategy};
///
/// let jobs = vec![
///     Job::new(1, 5).with_arrival(0),
///     Job::new(2, 1).with_arrival(2),
///     Job::new(3, 1).with_arrival(4),
/// ];
/// let sim = Simulator::default();
/// let outcome = sim.run(Strategy::Fcfs, &jobs).unwrap();
/// assert_eq!(outcome.job(3).unwrap().end_time, Some(7));
/// // Caller's jobs are untouched
/// assert_eq!(jobs[0].start_time, None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Parses a strategy name, using the configured default quantum.
    pub fn parse_strategy(&self, name: &str) -> Result<Strategy, ScheduleError> {
        Strategy::parse_with_quantum(name, self.config.default_quantum)
    }

    /// Runs one strategy over a fresh copy of `jobs`.
    ///
    /// The strategy rejects invalid input before mutating the copy; the
    /// caller's slice is never touched either way.
    pub fn run(&self, strategy: Strategy, jobs: &[Job]) -> Result<ScheduleOutcome, ScheduleError> {
        tracing::info!(strategy = %strategy, jobs = jobs.len(), "running simulation");
        let working: Vec<Job> = jobs.iter().map(Job::fresh_copy).collect();
        let tie_breaker = self.config.tie_breaker;

        match strategy {
            Strategy::Fcfs => run_fcfs(working),
            Strategy::Sjf => run_sjf_with(working, tie_breaker),
            Strategy::Priority => run_priority_with(working, tie_breaker),
            Strategy::RoundRobin { quantum } => run_round_robin(working, quantum),
        }
    }

    /// Runs a strategy selected by name.
    pub fn run_named(&self, name: &str, jobs: &[Job]) -> Result<ScheduleOutcome, ScheduleError> {
        let strategy = self.parse_strategy(name)?;
        self.run(strategy, jobs)
    }

    /// Runs each strategy on its own copy and computes its KPIs.
    ///
    /// Fails on the first strategy whose input is rejected.
    pub fn compare(
        &self,
        jobs: &[Job],
        strategies: &[Strategy],
    ) -> Result<Vec<Comparison>, ScheduleError> {
        strategies
            .iter()
            .map(|&strategy| {
                let outcome = self.run(strategy, jobs)?;
                let kpi = ScheduleKpi::calculate(&outcome);
                Ok(Comparison { outcome, kpi })
            })
            .collect()
    }

    /// Runs all four strategies, Round-Robin with the default quantum.
    pub fn compare_all(&self, jobs: &[Job]) -> Result<Vec<Comparison>, ScheduleError> {
        self.compare(jobs, &Strategy::all(self.config.default_quantum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::TieBreaker;
    use crate::validation::ValidationErrorKind;

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new(1, 6).with_arrival(0).with_priority("Low"),
            Job::new(2, 2).with_arrival(1).with_priority("High"),
            Job::new(3, 3).with_arrival(2).with_priority("Medium"),
            Job::new(4, 1).with_arrival(3).with_priority("Low"),
        ]
    }

    #[test]
    fn test_run_each_strategy() {
        let sim = Simulator::default();
        let jobs = sample_jobs();

        let fcfs = sim.run(Strategy::Fcfs, &jobs).unwrap();
        assert_eq!(fcfs.execution_order, vec![1, 2, 3, 4]);

        // J1 runs 0..6; then shortest first: J4(1), J2(2), J3(3)
        let sjf = sim.run(Strategy::Sjf, &jobs).unwrap();
        assert_eq!(sjf.execution_order, vec![1, 4, 2, 3]);
        assert_eq!(sjf.display_order(), vec![4, 2, 3, 1]);

        // J1 runs 0..6; then High, Medium, Low
        let prio = sim.run(Strategy::Priority, &jobs).unwrap();
        assert_eq!(prio.execution_order, vec![1, 2, 3, 4]);
        assert_eq!(prio.display_order(), vec![2, 3, 1, 4]);

        let rr = sim.run(Strategy::RoundRobin { quantum: 2 }, &jobs).unwrap();
        assert_eq!(rr.display_order(), vec![1, 2, 3, 4]);
        assert_eq!(rr.makespan(), 12);
    }

    #[test]
    fn test_run_does_not_mutate_input() {
        let sim = Simulator::default();
        let jobs = sample_jobs();
        let snapshot = jobs.clone();

        for strategy in Strategy::all(1) {
            sim.run(strategy, &jobs).unwrap();
        }
        assert_eq!(jobs, snapshot);
    }

    #[test]
    fn test_run_resets_stale_outputs() {
        let sim = Simulator::default();
        let mut jobs = sample_jobs();
        jobs[0].start_time = Some(99);
        jobs[0].remaining_time = 0;

        let outcome = sim.run(Strategy::Fcfs, &jobs).unwrap();
        assert_eq!(outcome.job(1).unwrap().start_time, Some(0));
        assert_eq!(outcome.job(1).unwrap().end_time, Some(6));
    }

    #[test]
    fn test_run_named() {
        let sim = Simulator::new(SimulationConfig::new().with_default_quantum(3));
        let outcome = sim.run_named("Round Robin", &sample_jobs()).unwrap();
        assert_eq!(outcome.strategy, Strategy::RoundRobin { quantum: 3 });

        let err = sim.run_named("EDF", &sample_jobs()).unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownStrategy(_)));
    }

    #[test]
    fn test_validation_precedes_run() {
        let sim = Simulator::default();
        let jobs = vec![Job::new(1, 3), Job::new(2, 0)];

        let err = sim.run(Strategy::Sjf, &jobs).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::InvalidBurstTime
        );
        assert!(err.to_string().contains("Job 2"));

        let err = sim
            .run(Strategy::RoundRobin { quantum: 0 }, &sample_jobs())
            .unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::InvalidQuantum
        );
    }

    #[test]
    fn test_each_problem_reported_once() {
        let sim = Simulator::default();
        let jobs = vec![Job::new(1, 0), Job::new(2, 2).with_arrival(-1)];

        let err = sim.run(Strategy::RoundRobin { quantum: 0 }, &jobs).unwrap_err();
        let kinds: Vec<_> = err.validation_errors().iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::InvalidBurstTime,
                ValidationErrorKind::InvalidArrivalTime,
                ValidationErrorKind::InvalidQuantum,
            ]
        );
        assert_eq!(jobs[0].start_time, None);
    }

    #[test]
    fn test_empty_job_set_is_noop() {
        let sim = Simulator::default();
        for strategy in Strategy::all(2) {
            let outcome = sim.run(strategy, &[]).unwrap();
            assert!(outcome.is_empty());
        }
    }

    #[test]
    fn test_config_tie_breaker_applies() {
        let jobs = vec![
            Job::new(8, 2).with_priority("High"),
            Job::new(3, 2).with_priority("High"),
        ];
        let fifo = Simulator::default().run(Strategy::Priority, &jobs).unwrap();
        assert_eq!(fifo.execution_order, vec![8, 3]);

        let by_id = Simulator::new(SimulationConfig::new().with_tie_breaker(TieBreaker::ById))
            .run(Strategy::Priority, &jobs)
            .unwrap();
        assert_eq!(by_id.execution_order, vec![3, 8]);
    }

    #[test]
    fn test_compare_all() {
        let sim = Simulator::default();
        let results = sim.compare_all(&sample_jobs()).unwrap();
        assert_eq!(results.len(), 4);

        let names: Vec<&str> = results.iter().map(|c| c.outcome.strategy.name()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "Priority", "Round Robin"]);

        // Same total work, no idle time → identical makespan everywhere
        assert!(results.iter().all(|c| c.kpi.makespan == 12));

        // SJF minimizes average waiting among the non-preemptive runs
        let sjf = &results[1].kpi;
        assert!(sjf.avg_waiting_time <= results[0].kpi.avg_waiting_time);
        assert!(sjf.avg_waiting_time <= results[2].kpi.avg_waiting_time);
    }
}
