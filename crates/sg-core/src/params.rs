//! Model construction parameters.
//!
//! Typically built by the launching application from CLI flags or a JSON
//! file and handed to `sg_sim::ModelBuilder`.  Validation happens once, at
//! construction, and a failure means no model is built at all.

use crate::{SgError, SgResult};

/// Largest meaningful homophily threshold: a Moore neighborhood has 8 cells.
pub const MAX_HOMOPHILY: u8 = 8;

/// Parameters for one Schelling run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelParams {
    /// Horizontal extent of the torus (cells).  Must be ≥ 1.
    pub width: u32,

    /// Vertical extent of the torus (cells).  Must be ≥ 1.
    pub height: u32,

    /// Probability that any given cell is populated at initialization, in [0, 1].
    pub density: f64,

    /// Probability that a populated cell holds a minority agent, in [0, 1].
    pub minority_pc: f64,

    /// Minimum number of same-kind neighbors for an agent to be happy, 0–8.
    pub homophily: u8,

    /// Seed for the run's `SimRng`.  `None` draws from OS entropy, which makes
    /// the run non-reproducible.
    pub seed: Option<u64>,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            width:       20,
            height:      20,
            density:     0.8,
            minority_pc: 0.2,
            homophily:   3,
            seed:        None,
        }
    }
}

impl ModelParams {
    /// Check every field against its permitted range.
    ///
    /// Returns the first violation found, in declaration order.
    pub fn validate(&self) -> SgResult<()> {
        if self.width == 0 {
            return Err(SgError::invalid("width", self.width, "an integer >= 1"));
        }
        if self.height == 0 {
            return Err(SgError::invalid("height", self.height, "an integer >= 1"));
        }
        check_unit_interval("density", self.density)?;
        check_unit_interval("minority_pc", self.minority_pc)?;
        if self.homophily > MAX_HOMOPHILY {
            return Err(SgError::invalid("homophily", self.homophily, "an integer in 0..=8"));
        }
        Ok(())
    }

    /// Total number of lattice cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

fn check_unit_interval(name: &'static str, value: f64) -> SgResult<()> {
    // NaN fails the range check too.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SgError::invalid(name, value, "a finite number in [0, 1]"))
    }
}
