//! `sg-metrics`: the run's observation log.
//!
//! After initialization and after every completed step the model hands its
//! state to [`MetricsCollector::collect`], which appends one
//! [`ModelSnapshot`]: the model-level happy count plus every agent's kind and
//! cell.  The log is append-only; nothing is ever rewritten or compacted.
//!
//! Plotting and visualization are left to the caller, which reads the log
//! through [`MetricsCollector::snapshots`] or the series helpers.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize` on `ModelSnapshot`/`AgentRecord`. |

pub mod collector;
pub mod row;

#[cfg(test)]
mod tests;

pub use collector::MetricsCollector;
pub use row::{AgentRecord, ModelSnapshot};
