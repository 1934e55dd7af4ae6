//! `sg-agent`: agent storage and population initialization.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA type tags), `Agent` (read-only view)     |
//! | [`builder`] | `PopulationBuilder` (random cell sweep → store + grid)     |
//!
//! Positions are not duplicated here: the grid owns the `AgentId → Position`
//! back-reference and keeps it in lockstep with occupancy.  [`Agent`] joins
//! the two when a caller wants the whole picture.

pub mod builder;
pub mod store;


pub use builder::PopulationBuilder;
pub use store::{Agent, AgentStore};
