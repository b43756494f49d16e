/*!
 * Core Types
 * Common types used across the simulator
 */

/// Caller-assigned job identifier
pub type JobId = u32;

/// Zero-based index of a processing core
pub type CoreId = usize;

/// Simulated time in abstract ticks
pub type Ticks = u64;

/// Job priority (lower value = higher precedence)
pub type Priority = i32;
