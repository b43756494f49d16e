/*!
 * Job Entity
 * A unit of work owned by either a core slot or the ready queue
 */

use crate::core::types::{JobId, Priority, Ticks};
use crate::queue::Identity;
use serde::Serialize;

/// Scheduled job
///
/// Identity fields are fixed at arrival. Service bookkeeping changes only when
/// the job is dispatched onto or taken off a core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub id: JobId,
    pub arrival_time: Ticks,
    pub run_time: Ticks,
    pub priority: Priority,
    remaining_time: Ticks,
    first_run: Option<Ticks>,
    #[serde(skip)]
    dispatched_at: Option<Ticks>,
}

impl Job {
    #[inline]
    #[must_use]
    pub fn new(id: JobId, arrival_time: Ticks, run_time: Ticks, priority: Priority) -> Self {
        Self {
            id,
            arrival_time,
            run_time,
            priority,
            remaining_time: run_time,
            first_run: None,
            dispatched_at: None,
        }
    }

    /// Service still owed, as of the last time the job left a core
    #[inline]
    pub const fn remaining_time(&self) -> Ticks {
        self.remaining_time
    }

    /// Service still owed at `now`, counting the current stint on a core
    #[inline]
    pub fn remaining_at(&self, now: Ticks) -> Ticks {
        match self.dispatched_at {
            Some(start) => self
                .remaining_time
                .saturating_sub(now.saturating_sub(start)),
            None => self.remaining_time,
        }
    }

    /// Time of first admission onto a core
    #[inline]
    pub const fn first_run(&self) -> Option<Ticks> {
        self.first_run
    }

    #[inline]
    pub const fn is_running(&self) -> bool {
        self.dispatched_at.is_some()
    }

    /// Start a stint on a core at `now`
    pub(crate) fn dispatch(&mut self, now: Ticks) {
        if self.first_run.is_none() {
            self.first_run = Some(now);
        }
        self.dispatched_at = Some(now);
    }

    /// End the current stint at `now` without completing, charging the service rendered
    pub(crate) fn preempt(&mut self, now: Ticks) {
        self.remaining_time = self.remaining_at(now);
        self.dispatched_at = None;
    }
}

/// Job ids are unique for a simulation's lifetime, so the id is the job's identity
impl Identity for Job {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
