//! Rule engine for multi-criteria dispatching.
//!
//! Composes a primary rule with tie-breaking rules and a final,
//! deterministic tie-breaking strategy.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Job;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    /// Keep candidate order (stable sort). With candidates in admission
    /// order this is FIFO among equal keys.
    #[default]
    InputOrder,
    /// Ascending job ID.
    ById,
}

/// A composable rule engine for ready-job selection.
///
/// Rules are applied in sequence; the next rule is consulted only when
/// the previous ones tie.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{RuleEngine, TieBreaker};
/// use u_cpusched::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::PriorityClassRule)
///     .with_tie_breaker(rules::Fifo)
///     .with_final_tie_breaker(TieBreaker::ById);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts jobs by priority (highest priority first).
    ///
    /// Returns indices into the job slice. The sort is stable.
    pub fn sort_indices(&self, jobs: &[Job], context: &SchedulingContext) -> Vec<usize> {
        let candidates: Vec<usize> = (0..jobs.len()).collect();
        self.sort_candidates(jobs, &candidates, context)
    }

    /// Sorts a subset of jobs (given as indices) by priority.
    pub fn sort_candidates(
        &self,
        jobs: &[Job],
        candidates: &[usize],
        context: &SchedulingContext,
    ) -> Vec<usize> {
        let mut sorted = candidates.to_vec();
        sorted.sort_by(|&a, &b| self.compare(&jobs[a], &jobs[b], context));
        sorted
    }

    /// Returns the index of the highest-priority job.
    pub fn select_best(&self, jobs: &[Job], context: &SchedulingContext) -> Option<usize> {
        self.sort_indices(jobs, context).first().copied()
    }

    /// Returns the position within `candidates` of the highest-priority job.
    ///
    /// Earlier candidates win complete ties under `TieBreaker::InputOrder`.
    pub fn select_among(
        &self,
        jobs: &[Job],
        candidates: &[usize],
        context: &SchedulingContext,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (pos, &idx) in candidates.iter().enumerate() {
            match best {
                None => best = Some(pos),
                Some(b) => {
                    if self.compare(&jobs[idx], &jobs[candidates[b]], context) == Ordering::Less {
                        best = Some(pos);
                    }
                }
            }
        }
        best
    }

    /// Evaluates a single job and returns scores from each rule.
    pub fn evaluate(&self, job: &Job, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(job, context)).collect()
    }

    fn compare(&self, a: &Job, b: &Job, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let ordering = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        // All rules tied → use final tie-breaker
        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
