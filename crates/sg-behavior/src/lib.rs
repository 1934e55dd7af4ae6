//! `sg-behavior`: what an agent does when it is activated.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`outcome`]   | `Outcome` (`Happy` / `Relocated`)                          |
//! | [`model`]     | `BehaviorModel` trait                                     |
//! | [`homophily`] | `Homophily`: the absolute same-kind-neighbor count rule  |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                      |
//!
//! # Design notes
//!
//! Activation is strictly sequential, so a behavior gets `&mut TorusGrid`
//! for the duration of one agent's action and nothing else can observe the
//! grid meanwhile.  The grid and the random source are passed in per call;
//! a behavior never stores either.

pub mod error;
pub mod homophily;
pub mod model;
pub mod outcome;


pub use error::{BehaviorError, BehaviorResult};
pub use homophily::Homophily;
pub use model::BehaviorModel;
pub use outcome::Outcome;
