//! Tabular report snapshot consumed by export collaborators.

use serde::Serialize;

use crate::error::ChainError;
use crate::matrix::WeightMatrix;
use crate::state::StateCell;

/// One cell of the report table.
///
/// The table is a plain rectangle of scalars with embedded header and blank
/// separator rows, so an export collaborator (spreadsheet writer, UI grid)
/// needs no knowledge of the model. `Empty` serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    /// Blank separator cell.
    Empty,
    /// Header or label text.
    Text(String),
    /// Integer statistic (visits, dwell time).
    Int(u64),
    /// Fractional value (weights, mean dwell time).
    Float(f64),
}

/// Column-header row: a blank corner followed by one label per state.
fn header_row(size: usize) -> Vec<ReportValue> {
    let mut row = Vec::with_capacity(size + 1);
    row.push(ReportValue::Text(String::new()));
    for i in 0..size {
        row.push(ReportValue::Text(format!("S{i}")));
    }
    row
}

/// Builds the tabular snapshot of the model.
///
/// Layout: a size header row, a blank separator, the labelled weight
/// sub-matrix, another separator, then per-state statistics — total visits,
/// total dwell time, and mean time per visit (0 when a state was never
/// visited).
pub fn plain_matrix(matrix: &WeightMatrix, states: &[StateCell]) -> Vec<Vec<ReportValue>> {
    let size = matrix.size();
    let mut table = Vec::new();

    table.push(vec![
        ReportValue::Text("Size".to_string()),
        ReportValue::Int(size as u64),
    ]);
    table.push(Vec::new());

    table.push(header_row(size));
    for i in 0..size {
        let mut row = Vec::with_capacity(size + 1);
        row.push(ReportValue::Text(format!("S{i}")));
        for j in 0..size {
            row.push(ReportValue::Float(matrix.get(i, j).value()));
        }
        table.push(row);
    }
    table.push(Vec::new());

    table.push(header_row(size));
    let mut visits = vec![ReportValue::Text("Visits".to_string())];
    let mut time_total = vec![ReportValue::Text("Time (total)".to_string())];
    let mut time_mean = vec![ReportValue::Text("Time (mean)".to_string())];
    for state in states {
        visits.push(ReportValue::Int(state.visits()));
        time_total.push(ReportValue::Int(state.time()));
        time_mean.push(ReportValue::Float(if state.visits() > 0 {
            state.time() as f64 / state.visits() as f64
        } else {
            0.0
        }));
    }
    table.push(visits);
    table.push(time_total);
    table.push(time_mean);

    table
}

/// Serializes a report table to pretty-printed JSON.
pub fn to_json(table: &[Vec<ReportValue>]) -> Result<String, ChainError> {
    serde_json::to_string_pretty(table).map_err(|e| ChainError::Serialization {
        reason: e.to_string(),
    })
}
