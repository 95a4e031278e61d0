//! End-to-end properties of the scoring engine, exercised through the
//! public library API with records built from the JSON wire shape.

use trace_score::parsing::json::parse_json_text;
use trace_score::{score_records, Channel, GlobalMetrics, Record, ScoreResult};

const EPS: f64 = 1e-6;

fn score_json(reference: &str, candidate: &str) -> ScoreResult {
    let reference = parse_json_text(reference).unwrap();
    let candidate = parse_json_text(candidate).unwrap();
    score_records(&reference, &candidate)
}

#[test]
fn identical_record_scores_100() {
    let json = r#"{"channels":[{"name":"I","values":[1,2,3,4,5]}]}"#;
    let result = score_json(json, json);

    assert!((result.overall - 100.0).abs() < EPS);
    assert_eq!(result.per_lead.len(), 1);
    assert!((result.per_lead["I"] - 100.0).abs() < EPS);
    assert!(result.error.is_none());

    let metrics = result.metrics.unwrap();
    assert!((metrics.correlation - 1.0).abs() < EPS);
    assert_eq!(metrics.mse, 0.0);
}

#[test]
fn missing_channels_yields_error_result() {
    let result = score_json(r#"{}"#, r#"{"channels":[{"name":"I","values":[1]}]}"#);

    assert_eq!(result.overall, 0.0);
    assert!(result.per_lead.is_empty());
    assert!(result.metrics.is_none());
    assert_eq!(result.error.as_deref(), Some("Missing lead data"));
}

#[test]
fn reference_only_channel_reported_zero_but_excluded_from_average() {
    let result = score_json(
        r#"{"channels":[{"name":"I","values":[1,2,3,4,5]},{"name":"II","values":[1,2,3]}]}"#,
        r#"{"channels":[{"name":"I","values":[1,2,3,4,5]}]}"#,
    );

    // Overall is 100, not 50: the missing channel does not enter the
    // denominator even though it appears in the map with 0.
    assert!((result.overall - 100.0).abs() < EPS);
    assert_eq!(result.per_lead["II"], 0.0);
}

#[test]
fn correlation_is_offset_invariant_end_to_end() {
    let reference = Record::from_channels(vec![Channel::new("I", vec![1.0, 2.0, 3.0, 4.0])]);
    let candidate = Record::from_channels(vec![Channel::new(
        "I",
        vec![1001.0, 1002.0, 1003.0, 1004.0],
    )]);

    let result = score_records(&reference, &candidate);
    let metrics = result.metrics.unwrap();
    assert!((metrics.correlation - 1.0).abs() < EPS);
}

#[test]
fn truncation_matches_explicit_prefix_comparison() {
    let long: Vec<f64> = (0..1000).map(|i| f64::from(i).sin()).collect();
    let short: Vec<f64> = long[..700].to_vec();

    let truncated = score_records(
        &Record::from_channels(vec![Channel::new("I", long)]),
        &Record::from_channels(vec![Channel::new("I", short.clone())]),
    );
    let exact = score_records(
        &Record::from_channels(vec![Channel::new("I", short.clone())]),
        &Record::from_channels(vec![Channel::new("I", short)]),
    );

    assert!((truncated.overall - exact.overall).abs() < EPS);
    assert_eq!(truncated.metrics, exact.metrics);
}

#[test]
fn flat_identical_record_recognized_via_defined_terms() {
    let json = r#"{"channels":[{"name":"I","values":[1,1,1,1,1]}]}"#;
    let result = score_json(json, json);

    // Correlation degenerates to 0 on zero variance; MSE and SSIM still
    // recognize the match, so the composite is well above zero.
    assert!(result.per_lead["I"] > 50.0);
    let metrics = result.metrics.unwrap();
    assert_eq!(metrics.correlation, 0.0);
    assert_eq!(metrics.mse, 0.0);
}

#[test]
fn zero_reference_channel_not_penalized_on_error_term() {
    let result = score_json(
        r#"{"channels":[{"name":"I","values":[0,0,0,0]}]}"#,
        r#"{"channels":[{"name":"I","values":[5,-5,5,-5]}]}"#,
    );

    // The zero-amplitude guard forces normalized MSE to 0; the score comes
    // from the remaining terms only and stays in range.
    assert!(result.per_lead["I"] >= 0.0);
    assert!(result.per_lead["I"] <= 100.0);
}

#[test]
fn result_json_round_trips_the_wire_contract() {
    let json = r#"{"channels":[{"name":"I","values":[1,2,3,4,5]}]}"#;
    let result = score_json(json, json);

    let serialized = serde_json::to_value(&result).unwrap();
    assert!((serialized["overall"].as_f64().unwrap() - 100.0).abs() < EPS);
    assert!((serialized["perLead"]["I"].as_f64().unwrap() - 100.0).abs() < EPS);
    assert!(serialized["metrics"]["correlation"].is_number());
    assert!(serialized.get("error").is_none());

    let round_tripped: ScoreResult = serde_json::from_value(serialized).unwrap();
    assert_eq!(round_tripped, result);
}

#[test]
fn global_metrics_pool_all_matched_channels() {
    // Flat channels at different levels: per-channel correlation is 0, but
    // pooled samples across channels correlate perfectly.
    let record = Record::from_channels(vec![
        Channel::new("I", vec![1.0, 1.0, 1.0]),
        Channel::new("II", vec![5.0, 5.0, 5.0]),
    ]);

    let result = score_records(&record, &record.clone());
    let GlobalMetrics { correlation, mse, .. } = result.metrics.unwrap();
    assert!((correlation - 1.0).abs() < EPS);
    assert_eq!(mse, 0.0);
    assert!(result.overall < 100.0);
}
