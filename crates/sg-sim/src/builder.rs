//! Fluent builder for constructing a [`Model`].

use sg_agent::PopulationBuilder;
use sg_behavior::{BehaviorModel, Homophily};
use sg_core::{ModelParams, SimRng};
use sg_metrics::MetricsCollector;
use sg_schedule::RandomActivation;
use tracing::info;

use crate::{Model, SimResult};

/// Fluent builder for [`Model<B>`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                         |
/// |------------------|-------------------------------------------------|
/// | `.behavior(b)`   | `Homophily { threshold: params.homophily }`     |
/// | `.rng(r)`        | `SimRng` from `params.seed` (entropy if `None`) |
///
/// # Example
///
/// ```rust,ignore
/// let mut model = ModelBuilder::new(params).build()?;
/// while model.running() {
///     model.step()?;
/// }
/// ```
pub struct ModelBuilder<B: BehaviorModel = Homophily> {
    params:   ModelParams,
    behavior: B,
    rng:      Option<SimRng>,
}

impl ModelBuilder<Homophily> {
    /// Create a builder using the standard homophily rule.
    pub fn new(params: ModelParams) -> Self {
        Self {
            behavior: Homophily::new(params.homophily),
            params,
            rng: None,
        }
    }
}

impl<B: BehaviorModel> ModelBuilder<B> {
    /// Replace the decision rule.  `params.homophily` is still validated but
    /// is otherwise only consulted by the default rule.
    pub fn behavior<B2: BehaviorModel>(self, behavior: B2) -> ModelBuilder<B2> {
        ModelBuilder { params: self.params, behavior, rng: self.rng }
    }

    /// Supply the run's random source directly, overriding `params.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate parameters, populate the grid, register every agent with the
    /// scheduler, record the step-0 snapshot, and return a running model.
    ///
    /// Fails fast on invalid parameters; no partially built model escapes.
    pub fn build(self) -> SimResult<Model<B>> {
        let params = self.params;
        params.validate()?;

        let mut rng = self.rng.unwrap_or_else(|| SimRng::from_seed_opt(params.seed));

        let (agents, grid) = PopulationBuilder::new(params.width, params.height)
            .density(params.density)
            .minority_pc(params.minority_pc)
            .populate(&mut rng)?;

        let mut schedule = RandomActivation::new();
        for id in agents.agent_ids() {
            schedule.add(id)?;
        }

        let mut metrics = MetricsCollector::new();
        metrics.collect(0, 0, 0, &agents, &grid);

        info!(
            width     = params.width,
            height    = params.height,
            agents    = agents.len(),
            homophily = params.homophily,
            seed      = ?params.seed,
            "model initialized"
        );

        Ok(Model::from_parts(params, rng, grid, agents, schedule, self.behavior, metrics))
    }
}
