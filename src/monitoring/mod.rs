/*!
 * Monitoring Module
 * Structured logging setup for embedding harnesses
 */

pub mod tracer;

pub use tracer::{init_tracing, TRACE_JSON_ENV};
