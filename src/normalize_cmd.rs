use anyhow::{Context, Result};

use walker_chain::{ReportValue, WeightMatrix};

use crate::cli::NormalizeArgs;
use crate::config;
use crate::table;

/// Print the row-normalized transition matrix without simulating.
pub fn run(args: NormalizeArgs) -> Result<()> {
    let config = config::load(&args.config)?;

    if config.model.weights.is_empty() {
        anyhow::bail!("no weights: set [model].weights in config");
    }
    let matrix = WeightMatrix::from_rows(&config.model.weights)
        .context("invalid [model].weights in config")?;

    let normalized = matrix.normalized();
    let size = matrix.size();

    let mut out = Vec::with_capacity(size + 1);
    let mut header = vec![ReportValue::Text(String::new())];
    for i in 0..size {
        header.push(ReportValue::Text(format!("S{i}")));
    }
    out.push(header);
    for (i, row) in normalized.iter().enumerate() {
        let mut line = Vec::with_capacity(size + 1);
        line.push(ReportValue::Text(format!("S{i}")));
        for cell in row {
            line.push(ReportValue::Float(cell.value()));
        }
        out.push(line);
    }

    print!("{}", table::render(&out));
    Ok(())
}
