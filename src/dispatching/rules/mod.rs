//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Time-based**: SPT
//! - **Queue**: FIFO
//! - **Priority**: PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for higher priority jobs.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Job;

// ======================== Time-based rules ========================

/// Shortest Processing Time.
///
/// Prioritizes jobs with shorter burst time. Selection rule of
/// Shortest-Job-First.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        job.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

// ======================== Queue rules ========================

/// First In First Out.
///
/// Prioritizes jobs by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        job.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

// ======================== Priority-based rule ========================

/// Priority-class rule.
///
/// Prioritizes jobs by class weight (High=1 … unknown=4).
#[derive(Debug, Clone, Copy)]
pub struct PriorityClassRule;

impl DispatchingRule for PriorityClassRule {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        i64::from(job.priority_weight())
    }

    fn description(&self) -> &'static str {
        "Priority Class"
    }
}
