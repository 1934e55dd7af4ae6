//! `sg-core`: foundational types for the Schelling segregation engine.
//!
//! This crate is a dependency of every other `sg-*` crate.  It has no `sg-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                       |
//! |-------------|------------------------------------------------|
//! | [`ids`]     | `AgentId`                                      |
//! | [`kind`]    | `AgentKind` (majority / minority type tag)     |
//! | [`params`]  | `ModelParams` and range validation             |
//! | [`rng`]     | `SimRng` (the single run-wide random source)   |
//! | [`error`]   | `SgError`, `SgResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.    |

pub mod error;
pub mod ids;
pub mod kind;
pub mod params;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SgError, SgResult};
pub use ids::AgentId;
pub use kind::AgentKind;
pub use params::{MAX_HOMOPHILY, ModelParams};
pub use rng::SimRng;
