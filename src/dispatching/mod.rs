//! Dispatching rules and rule engine for ready-queue selection.
//!
//! Provides selection rules (SPT, FIFO, priority class) and a
//! composable rule engine used by the non-preemptive strategies to pick
//! the next job from the ready structure.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{RuleEngine, SchedulingContext};
//! use u_cpusched::dispatching::rules;
//! use u_cpusched::models::Job;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_tie_breaker(rules::Fifo);
//!
//! let jobs = vec![Job::new(1, 8), Job::new(2, 1).with_arrival(1)];
//! let context = SchedulingContext::at_time(1);
//! assert_eq!(engine.select_best(&jobs, &context), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Job;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are exact
/// integers so that distinct keys never compare equal.
pub type RuleScore = i64;

/// A dispatching rule that evaluates how urgently a ready job should run.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for jobs that should be dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a job given the current scheduling context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, job: &Job, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
