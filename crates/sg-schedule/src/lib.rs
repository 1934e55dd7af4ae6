//! `sg-schedule`: agent activation order.
//!
//! # Crate layout
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`random`] | `RandomActivation`                        |
//! | [`error`]  | `ScheduleError`, `ScheduleResult<T>`      |
//!
//! # Activation model (summary)
//!
//! ```text
//! step(rng, f):
//!   order = registered agents, ascending AgentId
//!   shuffle(order, rng)            // fresh permutation every step
//!   for agent in order: f(agent, rng)?
//! ```
//!
//! The permutation is fixed on agent identity before the first activation,
//! so an agent that moves during the step is neither revisited nor skipped.

pub mod error;
pub mod random;


pub use error::{ScheduleError, ScheduleResult};
pub use random::RandomActivation;
