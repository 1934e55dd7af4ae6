//! schelling: command-line launcher for the segregation engine.
//!
//! Builds a model from flags (optionally layered over a JSON parameter
//! file), runs it until every agent is happy or the step cap is hit, then
//! prints either a human-readable summary with an ASCII map of the final
//! grid, or the full metrics history as JSON.
//!
//! ```text
//! schelling --width 30 --height 30 --homophily 4 --seed 7
//! schelling --config params.json --json > history.json
//! RUST_LOG=debug schelling --seed 1
//! ```

mod render;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sg_core::ModelParams;
use sg_sim::{ModelBuilder, ModelObserver, StepReport};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "schelling")]
#[command(version, about = "Run a Schelling segregation model on a toroidal grid", long_about = None)]
struct Cli {
    /// JSON file with model parameters; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Fraction of cells populated at start (0–1)
    #[arg(long)]
    density: Option<f64>,

    /// Fraction of agents in the minority group (0–1)
    #[arg(long)]
    minority_pc: Option<f64>,

    /// Similar neighbors an agent needs to be happy (0–8)
    #[arg(long)]
    homophily: Option<u8>,

    /// RNG seed; omit for a non-reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many steps even if not converged
    #[arg(short, long, default_value = "1000")]
    max_steps: u64,

    /// Log progress every N steps
    #[arg(long, default_value = "10")]
    report_every: u64,

    /// Print the metrics history as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn params(&self) -> Result<ModelParams> {
        let mut params = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => ModelParams::default(),
        };

        if let Some(v) = self.width {
            params.width = v;
        }
        if let Some(v) = self.height {
            params.height = v;
        }
        if let Some(v) = self.density {
            params.density = v;
        }
        if let Some(v) = self.minority_pc {
            params.minority_pc = v;
        }
        if let Some(v) = self.homophily {
            params.homophily = v;
        }
        if self.seed.is_some() {
            params.seed = self.seed;
        }

        Ok(params)
    }
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressLogger {
    every: u64,
}

impl ModelObserver for ProgressLogger {
    fn on_step_end(&mut self, r: &StepReport) {
        if self.every > 0 && r.step % self.every == 0 {
            info!(step = r.step, happy = r.happy, moved = r.relocated, total = r.total, "progress");
        }
    }

    fn on_converged(&mut self, r: &StepReport) {
        info!(step = r.step, "converged");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = cli.params()?;

    let mut model = ModelBuilder::new(params.clone()).build()?;

    let t0 = Instant::now();
    let mut obs = ProgressLogger { every: cli.report_every };
    let summary = model.run(Some(cli.max_steps), &mut obs)?;
    let elapsed = t0.elapsed();

    if cli.json {
        let out = serde_json::json!({
            "params":    params,
            "converged": summary.converged,
            "steps":     model.steps(),
            "history":   model.metrics().snapshots(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("=== schelling ===");
    println!(
        "Grid: {}x{}  |  Density: {}  |  Minority: {}  |  Homophily: {}  |  Seed: {}",
        params.width,
        params.height,
        params.density,
        params.minority_pc,
        params.homophily,
        params.seed.map_or_else(|| "entropy".to_owned(), |s| s.to_string()),
    );
    println!("Agents: {}", model.agent_count());
    println!(
        "{} after {} steps ({:.3} s)",
        if summary.converged { "Converged" } else { "Stopped" },
        model.steps(),
        elapsed.as_secs_f64(),
    );
    if let Some(last) = summary.last {
        println!("Happy on last step: {}/{}", last.happy, last.total);
    }
    println!();
    print!("{}", render::ascii(&model));

    Ok(())
}
