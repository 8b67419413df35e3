use std::fs;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use walker_chain::{MarkovEngine, WeightMatrix, to_json};

use crate::cli::SimulateArgs;
use crate::config;
use crate::table;

/// Run the sampling loop and print the statistics report.
pub fn run(args: SimulateArgs) -> Result<()> {
    let config = config::load(&args.config)?;

    if config.model.weights.is_empty() {
        anyhow::bail!("no weights: set [model].weights in config");
    }
    let matrix = WeightMatrix::from_rows(&config.model.weights)
        .context("invalid [model].weights in config")?;
    let mut engine = MarkovEngine::with_matrix(matrix);

    let mut rng = match args.seed.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let steps = args.steps.unwrap_or(config.simulate.steps);
    info!(size = engine.size(), steps, "starting simulation");

    let mut taken = 0u64;
    for _ in 0..steps {
        match engine.step(&mut rng) {
            Some(_) => taken += 1,
            None => {
                warn!(
                    current = engine.current(),
                    "no further simulation possible; stopping early"
                );
                break;
            }
        }
    }
    info!(
        taken,
        chains = engine.chains().len(),
        "simulation complete"
    );

    let report = engine.plain_matrix();
    print!("{}", table::render(&report));

    if let Some(path) = &args.output {
        let json = to_json(&report)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
