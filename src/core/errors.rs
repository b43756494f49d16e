/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{CoreId, JobId, Ticks};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ready queue errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum QueueError {
    #[error("Ready queue could not grow beyond {len} entries")]
    #[diagnostic(
        code(queue::capacity_exhausted),
        help("Allocation failed while growing the ready queue. The simulation cannot continue.")
    )]
    CapacityExhausted { len: usize },
}

/// Scheduler errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(scheduler::invalid_config),
        help("Use at least one core and one of fcfs, sjf, psjf, pri, ppri, rr.")
    )]
    InvalidConfig(String),

    #[error("Core {core_id} does not exist ({cores} cores configured)")]
    #[diagnostic(
        code(scheduler::invalid_core),
        help("Core indices are zero-based and must be below the configured core count.")
    )]
    InvalidCore { core_id: CoreId, cores: usize },

    #[error("Core {0} is idle")]
    #[diagnostic(
        code(scheduler::core_idle),
        help("Only a core that is running a job can finish it or have its quantum expire.")
    )]
    CoreIdle(CoreId),

    #[error("Core {core_id} is running job {running}, not job {requested}")]
    #[diagnostic(
        code(scheduler::job_mismatch),
        help("The completion event names a job that is not on this core.")
    )]
    JobMismatch {
        core_id: CoreId,
        running: JobId,
        requested: JobId,
    },

    #[error("Job {0} is already known to the scheduler")]
    #[diagnostic(
        code(scheduler::duplicate_job),
        help("Job ids must be unique for the lifetime of a simulation.")
    )]
    DuplicateJob(JobId),

    #[error("Time moved backwards: event at {requested}, scheduler already at {now}")]
    #[diagnostic(
        code(scheduler::time_regression),
        help("Events must be delivered in non-decreasing simulated time.")
    )]
    TimeRegression { now: Ticks, requested: Ticks },

    #[error("Quantum expiration is not supported under {0}")]
    #[diagnostic(
        code(scheduler::quantum_not_supported),
        help("Quantum timers only exist under round robin.")
    )]
    QuantumNotSupported(String),

    #[error("Workload not drained: {running} running, {queued} queued")]
    #[diagnostic(
        code(scheduler::workload_not_drained),
        help("Averages are only defined once every admitted job has completed.")
    )]
    WorkloadNotDrained { running: usize, queued: usize },

    #[error("Queue error: {0}")]
    #[diagnostic(transparent)]
    Queue(#[from] QueueError),
}

/// Result type for scheduler operations
///
/// # Must Use
/// Scheduler operations can fail and must be handled, a failed event leaves the simulation undefined
pub type SchedulerResult<T> = Result<T, SchedulerError>;
