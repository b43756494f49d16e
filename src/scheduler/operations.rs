/*!
 * Scheduler Core Operations
 * Arrival, completion and quantum expiration events
 */

use super::job::Job;
use super::{Scheduler, Scheme};
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{CoreId, JobId, Priority, Ticks};
use crate::queue::Identity;
use tracing::{debug, instrument, warn};

impl Scheduler {
    /// Handle a job arriving at `time`
    ///
    /// Returns the core the job was placed on, or `None` when it was queued.
    /// Under PSJF and PPRI the returned core may have been taken from a
    /// running job, which is then back in the ready queue.
    #[instrument(level = "debug", skip(self), fields(scheme = %self.scheme))]
    pub fn new_job(
        &mut self,
        id: JobId,
        time: Ticks,
        run_time: Ticks,
        priority: Priority,
    ) -> SchedulerResult<Option<CoreId>> {
        self.check_time(time)?;
        let job = Job::new(id, time, run_time, priority);
        if self.is_known(&job) {
            warn!(job_id = id, "Rejected duplicate job");
            return Err(SchedulerError::DuplicateJob(id));
        }
        self.now = time;

        if let Some(core_id) = self.idle_core() {
            self.dispatch(core_id, job);
            return Ok(Some(core_id));
        }

        if let Some(core_id) = self.preemption_victim(&job) {
            if let Some(mut victim) = self.cores[core_id].take() {
                victim.preempt(time);
                debug!(
                    core_id,
                    victim = victim.id,
                    job_id = id,
                    remaining = victim.remaining_time(),
                    "Job preempted by arrival"
                );
                self.ready.offer(victim)?;
                self.stats.inc_preemptions();
                self.dispatch(core_id, job);
                return Ok(Some(core_id));
            }
        }

        let position = self.ready.offer(job)?;
        debug!(job_id = id, position, "Job queued");
        Ok(None)
    }

    /// Handle the job on `core_id` completing at `time`
    ///
    /// Returns the id of the job now running on `core_id`, or `None` if it stays idle.
    #[instrument(level = "debug", skip(self), fields(scheme = %self.scheme))]
    pub fn job_finished(
        &mut self,
        core_id: CoreId,
        id: JobId,
        time: Ticks,
    ) -> SchedulerResult<Option<JobId>> {
        self.check_core(core_id)?;
        self.check_time(time)?;
        match &self.cores[core_id] {
            None => return Err(SchedulerError::CoreIdle(core_id)),
            Some(running) if running.id != id => {
                return Err(SchedulerError::JobMismatch {
                    core_id,
                    running: running.id,
                    requested: id,
                })
            }
            Some(_) => {}
        }
        self.now = time;

        if let Some(job) = self.cores[core_id].take() {
            self.stats.record_completion(&job, time);
            debug!(
                core_id,
                job_id = id,
                turnaround = time.saturating_sub(job.arrival_time),
                "Job finished"
            );
        }

        Ok(self.admit_next(core_id))
    }

    /// Handle the round-robin quantum expiring on `core_id` at `time`
    ///
    /// The running job goes to the tail of the ready queue and the front job
    /// takes the core, which is the same job when nothing else is waiting.
    #[instrument(level = "debug", skip(self), fields(scheme = %self.scheme))]
    pub fn quantum_expired(
        &mut self,
        core_id: CoreId,
        time: Ticks,
    ) -> SchedulerResult<Option<JobId>> {
        if self.scheme != Scheme::Rr {
            warn!(core_id, scheme = %self.scheme, "Quantum expired outside round robin");
            return Err(SchedulerError::QuantumNotSupported(self.scheme.to_string()));
        }
        self.check_core(core_id)?;
        self.check_time(time)?;
        self.now = time;

        let expired = match self.cores[core_id].take() {
            Some(mut job) => {
                job.preempt(time);
                let id = job.id;
                self.ready.offer(job)?;
                Some(id)
            }
            None => None,
        };

        let next = self.admit_next(core_id);
        if let (Some(expired), Some(next)) = (expired, next) {
            if expired != next {
                self.stats.inc_preemptions();
                debug!(core_id, expired, next, "Quantum rotated core");
            }
        }
        Ok(next)
    }

    /// Lowest-indexed idle core
    fn idle_core(&self) -> Option<CoreId> {
        self.cores.iter().position(Option::is_none)
    }

    /// Core whose running job `job` should displace, if any
    ///
    /// Picks the running job with the worst metric (latest arrival, then
    /// highest core index on ties) and only returns it when `job` is strictly better.
    fn preemption_victim(&self, job: &Job) -> Option<CoreId> {
        let incoming = self.scheme.displacement(job, self.now)?;

        let (core_id, worst) = self
            .cores
            .iter()
            .enumerate()
            .filter_map(|(core_id, slot)| {
                let running = slot.as_ref()?;
                let metric = self.scheme.displacement(running, self.now)?;
                Some((core_id, metric, running.arrival_time))
            })
            .max_by(|a, b| {
                a.1.cmp(&b.1)
                    .then_with(|| a.2.cmp(&b.2))
                    .then_with(|| a.0.cmp(&b.0))
            })
            .map(|(core_id, metric, _)| (core_id, metric))?;

        (incoming < worst).then_some(core_id)
    }

    /// Poll the ready queue onto `core_id`
    fn admit_next(&mut self, core_id: CoreId) -> Option<JobId> {
        let job = self.ready.poll()?;
        let id = job.id;
        self.dispatch(core_id, job);
        Some(id)
    }

    fn dispatch(&mut self, core_id: CoreId, mut job: Job) {
        job.dispatch(self.now);
        debug!(
            core_id,
            job_id = job.id,
            now = self.now,
            remaining = job.remaining_time(),
            "Job dispatched"
        );
        self.stats.inc_dispatches();
        self.cores[core_id] = Some(job);
    }

    fn is_known(&self, job: &Job) -> bool {
        self.cores.iter().flatten().any(|running| running.is_same(job))
            || self.ready.iter().any(|queued| queued.is_same(job))
    }

    fn check_core(&self, core_id: CoreId) -> SchedulerResult<()> {
        if core_id >= self.cores.len() {
            warn!(core_id, cores = self.cores.len(), "Rejected unknown core");
            return Err(SchedulerError::InvalidCore {
                core_id,
                cores: self.cores.len(),
            });
        }
        Ok(())
    }

    fn check_time(&self, time: Ticks) -> SchedulerResult<()> {
        if time < self.now {
            warn!(now = self.now, requested = time, "Rejected event from the past");
            return Err(SchedulerError::TimeRegression {
                now: self.now,
                requested: time,
            });
        }
        Ok(())
    }
}
