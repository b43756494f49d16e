/*!
 * Scheduler Statistics
 * Running totals updated on every completion, plus dispatch counters
 */

use super::job::Job;
use super::policy::Scheme;
use super::Scheduler;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Ticks;
use serde::Serialize;
use tracing::warn;

/// Running sums over completed jobs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsAccumulator {
    total_waiting: u64,
    total_turnaround: u64,
    total_response: u64,
    completed: u64,
    dispatches: u64,
    preemptions: u64,
}

impl StatisticsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a job completing at `completion` into the totals
    pub fn record_completion(&mut self, job: &Job, completion: Ticks) {
        let turnaround = completion.saturating_sub(job.arrival_time);
        if turnaround < job.run_time {
            warn!(
                job_id = job.id,
                completion,
                arrival = job.arrival_time,
                run_time = job.run_time,
                "Job completed before receiving its full service"
            );
        }
        let first_run = job.first_run().unwrap_or(completion);

        self.total_waiting += turnaround.saturating_sub(job.run_time);
        self.total_turnaround += turnaround;
        self.total_response += first_run.saturating_sub(job.arrival_time);
        self.completed += 1;
    }

    #[inline]
    pub fn inc_dispatches(&mut self) {
        self.dispatches += 1;
    }

    #[inline]
    pub fn inc_preemptions(&mut self) {
        self.preemptions += 1;
    }

    #[inline]
    pub const fn completed(&self) -> u64 {
        self.completed
    }

    pub fn average_waiting_time(&self) -> f64 {
        self.average(self.total_waiting)
    }

    pub fn average_turnaround_time(&self) -> f64 {
        self.average(self.total_turnaround)
    }

    pub fn average_response_time(&self) -> f64 {
        self.average(self.total_response)
    }

    fn average(&self, total: u64) -> f64 {
        if self.completed == 0 {
            0.0
        } else {
            total as f64 / self.completed as f64
        }
    }
}

/// Point-in-time view of a scheduler
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    pub scheme: Scheme,
    pub cores: usize,
    pub now: Ticks,
    pub running: usize,
    pub queued: usize,
    pub completed_jobs: u64,
    pub dispatches: u64,
    pub preemptions: u64,
    pub total_waiting: u64,
    pub total_turnaround: u64,
    pub total_response: u64,
}

impl Scheduler {
    /// Get scheduler statistics snapshot
    pub fn stats(&self) -> SchedulerStats {
        SchedulerStats {
            scheme: self.scheme,
            cores: self.cores.len(),
            now: self.now,
            running: self.running_count(),
            queued: self.ready.size(),
            completed_jobs: self.stats.completed,
            dispatches: self.stats.dispatches,
            preemptions: self.stats.preemptions,
            total_waiting: self.stats.total_waiting,
            total_turnaround: self.stats.total_turnaround,
            total_response: self.stats.total_response,
        }
    }

    /// Average waiting time over all completed jobs
    pub fn average_waiting_time(&self) -> SchedulerResult<f64> {
        self.ensure_drained()?;
        Ok(self.stats.average_waiting_time())
    }

    /// Average turnaround time over all completed jobs
    pub fn average_turnaround_time(&self) -> SchedulerResult<f64> {
        self.ensure_drained()?;
        Ok(self.stats.average_turnaround_time())
    }

    /// Average time from arrival to first admission over all completed jobs
    pub fn average_response_time(&self) -> SchedulerResult<f64> {
        self.ensure_drained()?;
        Ok(self.stats.average_response_time())
    }

    fn ensure_drained(&self) -> SchedulerResult<()> {
        let running = self.running_count();
        let queued = self.ready.size();
        if running > 0 || queued > 0 {
            warn!(running, queued, "Averages requested before the workload drained");
            return Err(SchedulerError::WorkloadNotDrained { running, queued });
        }
        Ok(())
    }
}
