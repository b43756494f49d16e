/*!
 * CPU Scheduler
 * Core allocation, admission and preemption over a fixed set of cores
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{CoreId, JobId, Ticks};
use crate::queue::OrderedQueue;
use tracing::{info, warn};

mod config;
mod job;
mod operations;
mod policy;
mod snapshot;
mod stats;

pub use config::{SchedulerConfig, SchedulerConfigBuilder};
pub use job::Job;
pub use policy::Scheme;
pub use snapshot::QueuedJob;
pub use stats::{SchedulerStats, StatisticsAccumulator};

/// Ready queue ordered by the active scheme
pub type ReadyQueue = OrderedQueue<Job, Scheme>;

/// Scheduler context for one simulation
///
/// Owns the core slots, the ready queue and the statistics. Every job lives in
/// exactly one core slot or in the ready queue until its completion is processed.
#[derive(Debug)]
pub struct Scheduler {
    scheme: Scheme,
    cores: Vec<Option<Job>>,
    ready: ReadyQueue,
    stats: StatisticsAccumulator,
    now: Ticks,
}

impl Scheduler {
    /// Create a scheduler with `cores` idle cores under `scheme`
    pub fn start_up(cores: usize, scheme: Scheme) -> SchedulerResult<Self> {
        Self::from_config(&SchedulerConfig::new(cores, scheme))
    }

    /// Create a scheduler from a validated configuration
    pub fn from_config(config: &SchedulerConfig) -> SchedulerResult<Self> {
        config.validate()?;

        let mut cores = Vec::new();
        cores
            .try_reserve_exact(config.cores)
            .map_err(|_| SchedulerError::InvalidConfig(format!(
                "cannot allocate {} cores",
                config.cores
            )))?;
        cores.resize_with(config.cores, || None);

        info!(
            cores = config.cores,
            scheme = %config.scheme,
            "Scheduler started"
        );

        Ok(Self {
            scheme: config.scheme,
            cores,
            ready: OrderedQueue::new(config.scheme),
            stats: StatisticsAccumulator::new(),
            now: 0,
        })
    }

    /// Release all retained state, returning the final statistics
    pub fn clean_up(mut self) -> SchedulerStats {
        let final_stats = self.stats();
        if final_stats.running > 0 || final_stats.queued > 0 {
            warn!(
                running = final_stats.running,
                queued = final_stats.queued,
                "Scheduler cleaned up with jobs still pending"
            );
        }

        self.ready.destroy();
        self.cores.clear();

        info!(
            completed = final_stats.completed_jobs,
            preemptions = final_stats.preemptions,
            "Scheduler cleaned up"
        );
        final_stats
    }

    #[inline]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    #[inline]
    pub fn core_count(&self) -> usize {
        self.cores.len()
    }

    /// Time of the latest event seen
    #[inline]
    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Job occupying `core_id`, `None` when idle or out of range
    pub fn core(&self, core_id: CoreId) -> Option<&Job> {
        self.cores.get(core_id).and_then(Option::as_ref)
    }

    /// Id of the job running on `core_id`
    pub fn running_job(&self, core_id: CoreId) -> Option<JobId> {
        self.core(core_id).map(|job| job.id)
    }

    /// Number of jobs waiting in the ready queue
    #[inline]
    pub fn queued(&self) -> usize {
        self.ready.size()
    }

    fn running_count(&self) -> usize {
        self.cores.iter().filter(|slot| slot.is_some()).count()
    }
}
