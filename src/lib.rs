/*!
 * Scheduling Simulator Core
 * Discrete-event CPU scheduling: ready queue, core allocation and statistics
 *
 * A harness feeds arrivals, completions and quantum expirations to a
 * [`Scheduler`] in non-decreasing time order and reads the averages once the
 * workload has drained.
 */

pub mod core;
pub mod monitoring;
pub mod queue;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{QueueError, SchedulerError, SchedulerResult};
pub use crate::core::types::{CoreId, JobId, Priority, Ticks};
pub use crate::monitoring::init_tracing;
pub use crate::queue::{Comparator, Identity, OrderedQueue};
pub use crate::scheduler::{
    Job, QueuedJob, ReadyQueue, Scheduler, SchedulerConfig, SchedulerConfigBuilder,
    SchedulerStats, Scheme, StatisticsAccumulator,
};
