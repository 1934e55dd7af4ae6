//! `sg-sim`: the Schelling model: owns the grid, the agents, the scheduler,
//! the random source and the metrics log, and drives them one step at a time.
//!
//! # Step
//!
//! ```text
//! step():
//!   ① happy := 0
//!   ② scheduler draws a fresh permutation of all agents
//!   ③ each agent, in that order: BehaviorModel::decide_and_act
//!        Happy       → happy += 1
//!        Relocated   → grid already updated
//!   ④ metrics snapshot (happy count + every agent's cell)
//!   ⑤ running := (happy != agent count)
//! ```
//!
//! # Quick-start
//!
//! ```rust
//! use sg_core::ModelParams;
//! use sg_sim::{ModelBuilder, NoopObserver};
//!
//! let params = ModelParams { seed: Some(7), ..ModelParams::default() };
//! let mut model = ModelBuilder::new(params).build()?;
//! let summary = model.run(Some(100), &mut NoopObserver)?;
//! assert_eq!(model.metrics().len() as u64, summary.steps_run + 1);
//! # Ok::<(), sg_sim::SimError>(())
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod observer;
pub mod report;


pub use builder::ModelBuilder;
pub use error::{SimError, SimResult};
pub use model::Model;
pub use observer::{ModelObserver, NoopObserver};
pub use report::{RunSummary, StepReport};
