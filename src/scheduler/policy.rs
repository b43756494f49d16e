/*!
 * Scheduling Policy
 * The six disciplines and their ordering and preemption behavior
 */

use super::job::Job;
use crate::core::errors::SchedulerError;
use crate::core::types::Ticks;
use crate::queue::Comparator;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Scheduling scheme
///
/// Every per-scheme decision (queue order, preemptiveness, displacement
/// metric) is resolved here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// First come, first served
    Fcfs,
    /// Shortest job first (non-preemptive)
    Sjf,
    /// Preemptive shortest job first (shortest remaining time)
    Psjf,
    /// Priority (non-preemptive)
    Pri,
    /// Preemptive priority
    Ppri,
    /// Round robin, time-sliced by external quantum events
    Rr,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::Fcfs,
        Scheme::Sjf,
        Scheme::Psjf,
        Scheme::Pri,
        Scheme::Ppri,
        Scheme::Rr,
    ];

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Psjf => "psjf",
            Self::Pri => "pri",
            Self::Ppri => "ppri",
            Self::Rr => "rr",
        }
    }

    /// Whether an arrival may displace a running job
    #[inline(always)]
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Psjf | Self::Ppri)
    }

    /// Ready queue order: `Less`/`Equal` puts `item` ahead of `existing`
    ///
    /// Round robin never reorders, every new entry goes to the tail.
    pub fn compare(&self, item: &Job, existing: &Job) -> Ordering {
        match self {
            Self::Fcfs => item.arrival_time.cmp(&existing.arrival_time),
            Self::Sjf => item.run_time.cmp(&existing.run_time),
            Self::Psjf => item.remaining_time().cmp(&existing.remaining_time()),
            Self::Pri | Self::Ppri => item.priority.cmp(&existing.priority),
            Self::Rr => Ordering::Greater,
        }
    }

    /// Displacement metric of `job` at `now`, larger is worse
    ///
    /// `None` for non-preemptive schemes.
    pub fn displacement(&self, job: &Job, now: Ticks) -> Option<i64> {
        match self {
            Self::Psjf => Some(i64::try_from(job.remaining_at(now)).unwrap_or(i64::MAX)),
            Self::Ppri => Some(i64::from(job.priority)),
            Self::Fcfs | Self::Sjf | Self::Pri | Self::Rr => None,
        }
    }
}

impl Comparator<Job> for Scheme {
    #[inline]
    fn compare(&self, item: &Job, existing: &Job) -> Ordering {
        Scheme::compare(self, item, existing)
    }
}

impl FromStr for Scheme {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "psjf" => Ok(Self::Psjf),
            "pri" | "priority" => Ok(Self::Pri),
            "ppri" => Ok(Self::Ppri),
            "rr" | "round_robin" => Ok(Self::Rr),
            _ => Err(SchedulerError::InvalidConfig(format!(
                "Invalid scheme '{}'. Valid: fcfs, sjf, psjf, pri, ppri, rr",
                s
            ))),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Scheme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Scheme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
