//! Simulation domain models.
//!
//! Provides the data types consumed and produced by the scheduling
//! strategies: the job record and the execution timeline.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Operating System | Batch Cluster | Print Spooler |
//! |------------|------------------|---------------|---------------|
//! | Job | Process burst | Batch job | Print job |
//! | PriorityClass | Nice level | Queue class | Job class |
//! | Slice | CPU time slice | Allocation | Print run |
//! | Timeline | Gantt chart | Accounting log | Spool log |

mod job;
mod timeline;

pub use job::{Job, JobId, PriorityClass};
pub use timeline::{Slice, Timeline};
