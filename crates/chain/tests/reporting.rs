use rand::SeedableRng;
use rand::rngs::StdRng;
use walker_chain::{ChainTracker, MarkovEngine, ReportValue, WeightMatrix, to_json};

// ---------------------------------------------------------------------------
// 1. transitions_match_manual_counting
// ---------------------------------------------------------------------------
#[test]
fn transitions_match_manual_counting() {
    // Chain [0, 1, 1, 0] must yield (0,1)=1, (1,1)=1, (1,0)=1, all else 0.
    let mut tracker = ChainTracker::new();
    tracker.append(1);
    tracker.append(1);
    tracker.append(0);

    let counts = tracker.transition_counts(2);
    assert_eq!(counts[0][1].value(), 1.0);
    assert_eq!(counts[1][1].value(), 1.0);
    assert_eq!(counts[1][0].value(), 1.0);
    assert_eq!(counts[0][0].value(), 0.0);
}

// ---------------------------------------------------------------------------
// 2. transitions_normalized_rows_are_stochastic
// ---------------------------------------------------------------------------
#[test]
fn transitions_normalized_rows_are_stochastic() {
    use approx::assert_abs_diff_eq;

    let matrix = WeightMatrix::from_rows(&[
        vec![1.0, 1.0, 2.0],
        vec![2.0, 1.0, 1.0],
        vec![1.0, 2.0, 1.0],
    ])
    .unwrap();
    let mut engine = MarkovEngine::with_matrix(matrix);
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..2000 {
        engine.step(&mut rng).unwrap();
    }

    for row in engine.transitions_normalized() {
        let sum: f64 = row.iter().map(|c| c.value()).sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);
    }
}

// ---------------------------------------------------------------------------
// 3. report_reflects_simulation
// ---------------------------------------------------------------------------
#[test]
fn report_reflects_simulation() {
    let matrix = WeightMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    let mut engine = MarkovEngine::with_matrix(matrix);
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..4 {
        engine.step(&mut rng).unwrap();
    }

    let table = engine.plain_matrix();
    assert_eq!(table.len(), 9);
    assert_eq!(table[0][1], ReportValue::Int(2));

    // Weight sub-matrix rows carry their state label.
    assert_eq!(table[3][0], ReportValue::Text("S0".to_string()));
    assert_eq!(table[3][2], ReportValue::Float(1.0));

    // After [0,1,0,1,0]: visits 3/2, time 2/2, mean 2/3 and 1.
    assert_eq!(table[6], vec![
        ReportValue::Text("Visits".to_string()),
        ReportValue::Int(3),
        ReportValue::Int(2),
    ]);
    assert_eq!(table[7], vec![
        ReportValue::Text("Time (total)".to_string()),
        ReportValue::Int(2),
        ReportValue::Int(2),
    ]);
    assert_eq!(table[8], vec![
        ReportValue::Text("Time (mean)".to_string()),
        ReportValue::Float(2.0 / 3.0),
        ReportValue::Float(1.0),
    ]);
}

// ---------------------------------------------------------------------------
// 4. report_guards_zero_visits
// ---------------------------------------------------------------------------
#[test]
fn report_guards_zero_visits() {
    // Nothing simulated: state 1 has zero visits, mean time must be 0.
    let engine = MarkovEngine::new();
    let table = engine.plain_matrix();
    assert_eq!(table[8][2], ReportValue::Float(0.0));
}

// ---------------------------------------------------------------------------
// 5. json_round_trips_table_shape
// ---------------------------------------------------------------------------
#[test]
fn json_round_trips_table_shape() {
    let engine = MarkovEngine::new();
    let table = engine.plain_matrix();
    let json = to_json(&table).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), table.len());

    // Separator rows are empty arrays, the size row starts with its label.
    assert!(rows[1].as_array().unwrap().is_empty());
    assert_eq!(rows[0][0], serde_json::json!("Size"));
    assert_eq!(rows[0][1], serde_json::json!(2));
}
