use exonet::catalog::sample_pool;
use exonet::classifier::{ClassificationEngine, Direction, FeatureKey, FeatureSet, Label};
use exonet::classify;

fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

fn strong_candidate() -> FeatureSet {
    FeatureSet::new()
        .with("koi_model_snr", 78.5)
        .with("koi_fpflag_nt", 0.0)
        .with("koi_fpflag_ss", 0.0)
        .with("koi_fpflag_co", 0.0)
        .with("koi_fpflag_ec", 0.0)
        .with("koi_prad", 2.65)
        .with("koi_depth", 890.0)
        .with("koi_period", 3.689)
        .with("koi_impact", 0.12)
}

fn flagged_candidate() -> FeatureSet {
    FeatureSet::new()
        .with("koi_fpflag_nt", 1.0)
        .with("koi_fpflag_ss", 1.0)
        .with("koi_fpflag_co", 1.0)
        .with("koi_fpflag_ec", 1.0)
        .with("koi_model_snr", 5.0)
        .with("koi_prad", 50.0)
        .with("koi_depth", 10.0)
        .with("koi_period", 1000.0)
        .with("koi_impact", 0.5)
}

#[test]
fn strong_candidate_clamps_to_certain_planet() {
    let engine = ClassificationEngine::default();
    let sheet = engine.score_sheet(&strong_candidate());
    assert!(approx(sheet.raw, 1.01));

    let result = classify(&strong_candidate());
    assert_eq!(result.label, Label::Planet);
    assert_eq!(result.score, 1.0);
    assert_eq!(result.confidence, 1.0);
    assert_eq!(result.confidence_percent(), "100.0");

    assert_eq!(result.explanations.len(), 5);
    assert_eq!(result.explanations[0].feature, FeatureKey::KoiModelSnr);
    assert_eq!(result.explanations[0].direction, Direction::Positive);
    assert!(result
        .explanations
        .iter()
        .all(|entry| entry.direction == Direction::Positive));
}

#[test]
fn flagged_candidate_clamps_to_certain_false_positive() {
    let engine = ClassificationEngine::default();
    let sheet = engine.score_sheet(&flagged_candidate());
    assert!(approx(sheet.raw, -0.42));

    let result = classify(&flagged_candidate());
    assert_eq!(result.label, Label::FalsePositive);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.confidence, 1.0);

    let top = &result.explanations[0];
    assert_eq!(top.feature, FeatureKey::KoiPrad);
    assert!(approx(top.magnitude, 10.0));

    let flags = result
        .explanations
        .iter()
        .find(|entry| entry.feature == FeatureKey::KoiFpflagNt)
        .expect("flag explanation present");
    assert_eq!(flags.direction, Direction::Negative);
    assert!(approx(flags.magnitude, 8.0));
    assert_eq!(flags.value, 1.0);
}

#[test]
fn empty_feature_set_defaults_every_field_to_zero() {
    let result = classify(&FeatureSet::new());

    assert_eq!(result.label, Label::FalsePositive);
    assert!(approx(result.score, 0.18));
    assert!(approx(result.confidence, 0.82));
    assert_eq!(result.confidence_percent(), "82.0");

    let snr = &result.explanations[0];
    assert_eq!(snr.feature, FeatureKey::KoiModelSnr);
    assert_eq!(snr.direction, Direction::Negative);
    assert!(approx(snr.magnitude, 4.0));
}

#[test]
fn snr_of_exactly_sixty_takes_middle_branch() {
    let at_sixty = ClassificationEngine::default()
        .score_sheet(&FeatureSet::new().with("koi_model_snr", 60.0))
        .raw;
    let at_forty_one = ClassificationEngine::default()
        .score_sheet(&FeatureSet::new().with("koi_model_snr", 41.0))
        .raw;
    assert_eq!(at_sixty, at_forty_one);
}

#[test]
fn score_rises_across_each_snr_boundary() {
    let engine = ClassificationEngine::default();
    let base = FeatureSet::new().with("koi_prad", 20.0).with("koi_impact", 3.0);
    let scores: Vec<f64> = [10.0, 30.0, 50.0, 70.0]
        .into_iter()
        .map(|snr| engine.classify(&base.clone().with("koi_model_snr", snr)).score)
        .collect();

    assert!(scores.windows(2).all(|pair| pair[0] < pair[1]), "{scores:?}");
}

#[test]
fn classification_is_deterministic() {
    for row in sample_pool() {
        let features = row.to_feature_set();
        let first = classify(&features);
        let second = classify(&features);
        assert_eq!(first, second);
        assert_eq!(first.score.to_bits(), second.score.to_bits());
    }
}

#[test]
fn bounds_hold_across_a_grid_of_inputs() {
    let values = [-1e6, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 20.0, 40.0, 60.0, 500.0, 5000.0, 1e9];
    for &snr in &values {
        for &depth in &values {
            for &flag in &[0.0, 1.0, 3.0] {
                let features = FeatureSet::new()
                    .with("koi_model_snr", snr)
                    .with("koi_depth", depth)
                    .with("koi_period", depth)
                    .with("koi_prad", snr)
                    .with("koi_fpflag_co", flag);
                let result = classify(&features);

                assert!((0.0..=1.0).contains(&result.score));
                assert!((0.5..=1.0).contains(&result.confidence));
                assert_eq!(result.label == Label::Planet, result.score > 0.5);
                assert_eq!(result.explanations.len(), 5);
                assert!(result
                    .explanations
                    .iter()
                    .all(|entry| entry.magnitude.is_finite() && entry.magnitude >= 0.0));
                assert!(result
                    .explanations
                    .windows(2)
                    .all(|pair| pair[0].magnitude >= pair[1].magnitude));
            }
        }
    }
}

#[test]
fn unrecognized_features_do_not_change_the_outcome() {
    let plain = classify(&strong_candidate());
    let noisy = classify(
        &strong_candidate()
            .with("koi_steff", 5500.0)
            .with("ra", 45.234)
            .with("unrelated", -99.0),
    );
    assert_eq!(plain, noisy);
}
