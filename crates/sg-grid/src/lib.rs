//! `sg-grid`: the bounded 2D toroidal lattice agents live on.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`position`] | `Position` (cell coordinates)                     |
//! | [`torus`]    | `TorusGrid` (occupancy, neighbors, relocation)    |
//! | [`error`]    | `GridError`, `GridResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Position`.     |

pub mod error;
pub mod position;
pub mod torus;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use position::Position;
pub use torus::TorusGrid;
