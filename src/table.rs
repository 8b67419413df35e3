//! Plain-text rendering of report tables.

use walker_chain::ReportValue;

/// Formats one report cell for terminal output.
fn format_value(value: &ReportValue) -> String {
    match value {
        ReportValue::Empty => String::new(),
        ReportValue::Text(s) => s.clone(),
        ReportValue::Int(n) => n.to_string(),
        ReportValue::Float(v) => {
            if v.fract() == 0.0 {
                format!("{v:.0}")
            } else {
                format!("{v:.4}")
            }
        }
    }
}

/// Renders a report table with right-padded, space-separated columns.
/// Blank separator rows render as empty lines.
pub fn render(table: &[Vec<ReportValue>]) -> String {
    let formatted: Vec<Vec<String>> = table
        .iter()
        .map(|row| row.iter().map(format_value).collect())
        .collect();

    let n_cols = formatted.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; n_cols];
    for row in &formatted {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    for row in &formatted {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:>width$}", width = widths[i]))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_each_kind() {
        assert_eq!(format_value(&ReportValue::Empty), "");
        assert_eq!(format_value(&ReportValue::Text("S0".to_string())), "S0");
        assert_eq!(format_value(&ReportValue::Int(7)), "7");
        assert_eq!(format_value(&ReportValue::Float(2.0)), "2");
        assert_eq!(format_value(&ReportValue::Float(0.25)), "0.2500");
    }

    #[test]
    fn renders_aligned_rows() {
        let table = vec![
            vec![
                ReportValue::Text(String::new()),
                ReportValue::Text("S0".to_string()),
                ReportValue::Text("S1".to_string()),
            ],
            vec![],
            vec![
                ReportValue::Text("S0".to_string()),
                ReportValue::Float(10.0),
                ReportValue::Float(0.5),
            ],
        ];
        let text = render(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "");
        assert!(lines[2].contains("10"));
        assert!(lines[2].contains("0.5000"));
    }
}
