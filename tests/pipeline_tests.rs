//! End-to-end tests for the regression pipeline contract:
//! model selection, in-sample fit, aligned predictions and fit metrics.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use econml::{
    params, AlgorithmKind, IndicatorSeries, PipelineError, PredictRequest, PredictResponse,
    RegressionPipeline,
};

const ALL_KINDS: [AlgorithmKind; 4] = [
    AlgorithmKind::DecisionTree,
    AlgorithmKind::RandomForest,
    AlgorithmKind::SupportVector,
    AlgorithmKind::Polynomial,
];

fn sample_years() -> Vec<i32> {
    vec![2000, 2001, 2002, 2003, 2004, 2005]
}

fn sample_series() -> Vec<IndicatorSeries> {
    vec![
        IndicatorSeries::new("gdp", vec![100.0, 104.0, 110.0, 118.0, 121.0, 130.0]),
        IndicatorSeries::new("inflation", vec![2.1, 2.5, 1.9, 3.2, 2.8, 2.2]),
    ]
}

#[test]
fn every_algorithm_returns_aligned_predictions() {
    let years = sample_years();
    let series = sample_series();

    for kind in ALL_KINDS {
        let pipeline = RegressionPipeline::with_seed(42);
        let output = pipeline.run(&years, &series, kind).unwrap();

        assert_eq!(output.years, years);
        assert!(output.failures.is_empty(), "{kind}: {:?}", output.failures);
        for s in &series {
            let preds = &output.predictions[&s.name];
            assert_eq!(preds.len(), years.len(), "algorithm {kind}");
            assert!(preds.iter().all(|v| v.is_finite()));
            assert!(output.metrics.contains_key(&s.name));
        }
    }
}

#[test]
fn rmse_dominates_mae_for_every_algorithm() {
    let years = sample_years();
    let series = sample_series();

    for kind in ALL_KINDS {
        let pipeline = RegressionPipeline::with_seed(7);
        let output = pipeline.run(&years, &series, kind).unwrap();

        for (name, m) in &output.metrics {
            assert!(m.rmse >= m.mae, "{kind}/{name}: rmse {} < mae {}", m.rmse, m.mae);
            assert!(m.mae >= 0.0);
            assert!(m.r2.is_finite());
        }
    }
}

#[test]
fn exact_cubic_is_a_perfect_polynomial_fit() {
    // Small year values so the assertion tests the contract rather than
    // f64 conditioning of a raw-year Vandermonde matrix.
    let years: Vec<i32> = (1..=8).collect();
    let values: Vec<f64> = years
        .iter()
        .map(|&t| {
            let t = f64::from(t);
            0.5 * t * t * t - 2.0 * t * t + 3.0 * t - 7.0
        })
        .collect();
    let series = vec![IndicatorSeries::new("hdi_index", values)];

    let pipeline = RegressionPipeline::new();
    let output = pipeline
        .run(&years, &series, AlgorithmKind::Polynomial)
        .unwrap();

    let m = output.metrics["hdi_index"];
    assert_relative_eq!(m.r2, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(m.rmse, 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(m.mae, 0.0, epsilon = 1e-5);
}

#[test]
fn compound_growth_gdp_tracks_closely_under_polynomial_reg() {
    // ~10% compound growth, algorithm given by its wire alias
    let years = vec![2000, 2001, 2002, 2003, 2004];
    let series = vec![IndicatorSeries::new(
        "gdp",
        vec![100.0, 110.0, 121.0, 133.0, 146.3],
    )];
    let algorithm: AlgorithmKind = "polynomial_reg".parse().unwrap();

    let pipeline = RegressionPipeline::new();
    let output = pipeline.run(&years, &series, algorithm).unwrap();

    let m = output.metrics["gdp"];
    assert!(m.r2 > 0.99, "r2 = {}", m.r2);
    assert!(m.rmse < 1.0, "rmse = {}", m.rmse);

    let preds = &output.predictions["gdp"];
    assert_eq!(preds.len(), 5);
    for (pred, obs) in preds.iter().zip(&series[0].values) {
        assert!((pred - obs).abs() < 2.0, "pred {pred} vs obs {obs}");
    }
}

#[test]
fn constant_series_under_decision_tree_does_not_raise() {
    let years = vec![2000, 2001];
    let series = vec![IndicatorSeries::new("services", vec![5.0, 5.0])];

    let pipeline = RegressionPipeline::new();
    let output = pipeline
        .run(&years, &series, AlgorithmKind::DecisionTree)
        .unwrap();

    assert_eq!(output.predictions["services"], vec![5.0, 5.0]);
    // Zero-variance convention: r2 is 0.0 rather than NaN or an error
    let m = output.metrics["services"];
    assert_eq!(m.r2, 0.0);
    assert_eq!(m.mae, 0.0);
    assert_eq!(m.rmse, 0.0);
}

#[test]
fn single_point_series_yields_finite_metrics_never_nan() {
    let years = vec![2000];
    let series = vec![IndicatorSeries::new("gdp", vec![5.0])];

    // Polynomial is rejected up front for one point; every other model
    // must either fit or drop the indicator with a note, never emit NaN
    for kind in [
        AlgorithmKind::DecisionTree,
        AlgorithmKind::RandomForest,
        AlgorithmKind::SupportVector,
    ] {
        let output = RegressionPipeline::with_seed(9)
            .run(&years, &series, kind)
            .unwrap();

        if let Some(note) = output.failures.get("gdp") {
            assert!(!note.is_empty(), "{kind}");
            assert!(!output.metrics.contains_key("gdp"), "{kind}");
            continue;
        }

        let preds = &output.predictions["gdp"];
        assert_eq!(preds.len(), 1, "{kind}");
        assert!(preds[0].is_finite(), "{kind}");

        let m = output.metrics["gdp"];
        assert!(m.mae.is_finite() && m.rmse.is_finite(), "{kind}");
        // One point has zero variance, so the r2 convention applies
        assert_eq!(m.r2, 0.0, "{kind}");
    }
}

#[test]
fn deterministic_algorithms_are_idempotent() {
    let years = sample_years();
    let series = sample_series();

    for kind in [AlgorithmKind::SupportVector, AlgorithmKind::Polynomial] {
        let pipeline = RegressionPipeline::new();
        let first = pipeline.run(&years, &series, kind).unwrap();
        let second = pipeline.run(&years, &series, kind).unwrap();

        for s in &series {
            assert_eq!(
                first.predictions[&s.name], second.predictions[&s.name],
                "algorithm {kind}"
            );
            assert_eq!(first.metrics[&s.name], second.metrics[&s.name]);
        }
    }
}

#[test]
fn seeded_random_forest_is_reproducible() {
    let years = sample_years();
    let series = sample_series();

    let first = RegressionPipeline::with_seed(1234)
        .run(&years, &series, AlgorithmKind::RandomForest)
        .unwrap();
    let second = RegressionPipeline::with_seed(1234)
        .run(&years, &series, AlgorithmKind::RandomForest)
        .unwrap();

    assert_eq!(first.predictions["gdp"], second.predictions["gdp"]);
    assert_eq!(first.metrics["gdp"], second.metrics["gdp"]);
}

#[test]
fn unknown_algorithm_is_rejected_before_any_fit() {
    let err = "quantum_regressor".parse::<AlgorithmKind>().unwrap_err();
    assert!(matches!(err, PipelineError::UnsupportedAlgorithm(_)));
    assert_eq!(err.to_string(), "Unsupported algorithm: quantum_regressor");
}

#[test]
fn mismatched_series_length_fails_the_request() {
    let years = vec![2000, 2001];
    let series = vec![IndicatorSeries::new("gdp", vec![1.0, 2.0, 3.0])];

    let err = RegressionPipeline::new()
        .run(&years, &series, AlgorithmKind::DecisionTree)
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::DimensionMismatch { years: 2, values: 3, .. }
    ));
}

#[test]
fn polynomial_on_three_points_is_insufficient_data() {
    let years = vec![2000, 2001, 2002];
    let series = vec![IndicatorSeries::new("gdp", vec![1.0, 2.0, 3.0])];

    let err = RegressionPipeline::new()
        .run(&years, &series, AlgorithmKind::Polynomial)
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::InsufficientData { required: 4, actual: 3 }
    ));
}

#[test]
fn request_json_resolves_to_a_runnable_pipeline_input() {
    let raw = r#"{"country":"Slovakia","parameters":["gdp","warp_drive","lex"],"algorithm":"svm"}"#;
    let request: PredictRequest = serde_json::from_str(raw).unwrap();

    assert_eq!(request.country, "Slovakia");
    // Unresolvable names are filtered out upstream of the pipeline
    assert_eq!(params::resolve(&request.parameters), vec!["gdp", "lex"]);
    assert_eq!(
        request.algorithm.parse::<AlgorithmKind>().unwrap(),
        AlgorithmKind::SupportVector
    );
}

#[test]
fn response_json_carries_the_wire_fields() {
    let years = sample_years();
    let series = sample_series();

    let output = RegressionPipeline::new()
        .run(&years, &series, AlgorithmKind::Polynomial)
        .unwrap();
    let response = PredictResponse::from_output(output);
    let json = serde_json::to_value(&response).unwrap();

    assert!(json.get("years").is_some());
    assert!(json["predictions"].get("gdp").is_some());
    let gdp_metrics = &json["metrics"]["gdp"];
    for field in ["r2", "mae", "rmse"] {
        assert!(gdp_metrics[field].is_number(), "missing {field}");
    }
    // No failures, so the errors map is omitted entirely
    assert!(json.get("errors").is_none());
}
