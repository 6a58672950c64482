//! CPU job-scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates classical single-processor scheduling disciplines over a finite
//! job set with known arrival, burst and priority class, producing per-job
//! start/end times under each discipline.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `PriorityClass`, `Slice`, `Timeline`
//! - **`dispatching`**: Selection rules (SPT, FIFO, priority class) and `RuleEngine`
//! - **`scheduler`**: FCFS, SJF, Priority, Round-Robin, `Simulator`, `ScheduleKpi`
//! - **`validation`**: Input checks run before any job is mutated
//! - **`workload`**: Seeded synthetic job sets
//!
//! # Simulation model
//!
//! Discrete-event over integer seconds. The clock starts at 0 and jumps
//! over idle gaps; there is no I/O phase, no multi-resource scheduling and
//! no priority aging. Every run works on its own copy of the job set.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::ScheduleError;
pub use models::{Job, JobId, PriorityClass};
pub use scheduler::{ScheduleOutcome, Simulator, Strategy};
