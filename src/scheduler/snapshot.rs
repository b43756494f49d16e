/*!
 * Queue Introspection
 * Debug views of the ready queue and core occupancy
 */

use super::job::Job;
use super::Scheduler;
use crate::core::types::{CoreId, JobId, Priority, Ticks};
use serde::Serialize;
use std::cmp::Ordering;

/// One ready-queue entry as seen from outside
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct QueuedJob {
    pub id: JobId,
    pub arrival_time: Ticks,
    pub run_time: Ticks,
    pub priority: Priority,
    pub remaining_time: Ticks,
}

impl From<&Job> for QueuedJob {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            arrival_time: job.arrival_time,
            run_time: job.run_time,
            priority: job.priority,
            remaining_time: job.remaining_time(),
        }
    }
}

impl Scheduler {
    /// Ready queue contents, front first
    pub fn queue_snapshot(&self) -> Vec<QueuedJob> {
        self.ready.iter().map(QueuedJob::from).collect()
    }

    /// All known jobs in scheduling order as `id(core)`, queued jobs show `-1`
    ///
    /// Running jobs are slotted in among the queued ones by the active scheme,
    /// e.g. `2(-1) 4(0) 1(-1)` under PRI.
    pub fn show_queue(&self) -> String {
        let mut order: Vec<(&Job, Option<CoreId>)> =
            self.ready.iter().map(|job| (job, None)).collect();

        for (core_id, slot) in self.cores.iter().enumerate() {
            if let Some(running) = slot {
                let index = order
                    .iter()
                    .position(|(queued, _)| {
                        self.scheme.compare(running, queued) != Ordering::Greater
                    })
                    .unwrap_or(order.len());
                order.insert(index, (running, Some(core_id)));
            }
        }

        if order.is_empty() {
            return "Queue is empty".to_string();
        }

        order
            .iter()
            .map(|(job, core)| match core {
                Some(core_id) => format!("{}({})", job.id, core_id),
                None => format!("{}(-1)", job.id),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
