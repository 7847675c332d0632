use domain::inference::{JointModel, RankingOptions};
use domain::{Catalog, Disorder, InferenceContext, Interval, Symptom};
use pretty_assertions::assert_eq;

fn disorder(id: u64, name: &str, symptoms: &[(&str, f64, f64)]) -> Disorder {
    let symptoms = symptoms
        .iter()
        .enumerate()
        .map(|(i, (n, lo, hi))| {
            Symptom::new(100 + i as u64, *n, "Frequent", Interval::new(*lo, *hi)).unwrap()
        })
        .collect();
    Disorder::new(
        id,
        name,
        format!("http://www.orpha.net/consor/cgi-bin/OC_Exp.php?lng=en&Expert={id}"),
        "Disease",
        symptoms,
    )
}

fn context(disorders: Vec<Disorder>) -> InferenceContext {
    InferenceContext::build(Catalog::new(disorders)).unwrap()
}

fn neuro_catalog() -> InferenceContext {
    context(vec![
        disorder(
            1,
            "Dravet syndrome",
            &[
                ("Seizure", 0.8, 0.99),
                ("Ataxia", 0.3, 0.79),
                ("Hypotonia", 0.05, 0.29),
            ],
        ),
        disorder(
            2,
            "Rett syndrome",
            &[("Seizure", 0.3, 0.79), ("Spasticity", 0.3, 0.79)],
        ),
        disorder(
            3,
            "Aicardi syndrome",
            &[
                ("Agenesis of corpus callosum", 1.0, 1.0),
                ("Seizure", 0.8, 0.99),
            ],
        ),
        disorder(4, "Achondroplasia", &[("Short stature", 1.0, 1.0)]),
        disorder(5, "Unremarkable", &[]),
    ])
}

#[test]
fn test_single_symptom_excludes_empty_disorder() {
    let ctx = context(vec![
        disorder(1, "D1", &[("seizure", 0.3, 0.6)]),
        disorder(2, "D2", &[]),
    ]);

    let results = ctx.rank(&["seizure"]).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].disorder.name(), "D1");
    assert!(results[0].p_high > 0.0);
    assert_eq!(results[0].matched_symptoms, vec!["seizure"]);
}

#[test]
fn test_results_are_sorted_by_high_bound() {
    let ctx = neuro_catalog();
    let results = ctx
        .rank(&[
            "seizure",
            "spasticity",
            "agenesis of corpus callosum",
            "hyperreflexia",
        ])
        .unwrap();

    assert_eq!(results.len(), 3);
    for pair in results.windows(2) {
        assert!(pair[0].p_high >= pair[1].p_high);
    }
    assert!(results
        .iter()
        .all(|r| r.disorder.name() != "Achondroplasia" && r.disorder.name() != "Unremarkable"));
}

#[test]
fn test_matched_symptoms_use_catalog_spelling() {
    let ctx = neuro_catalog();
    let results = ctx.rank(&["SEIZURE", "ataxia", "seizure"]).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].disorder.name(), "Dravet syndrome");
    assert_eq!(results[0].matched_symptoms, vec!["Seizure", "Ataxia"]);
}

#[test]
fn test_relative_weights_sum_to_one() {
    let ctx = neuro_catalog();
    let results = ctx.rank(&["Seizure", "Ataxia"]).unwrap();

    let total: f64 = results.iter().map(|r| r.relative_weight).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_bounds_are_ordered_for_well_formed_input() {
    let ctx = neuro_catalog();
    let results = ctx.rank(&["seizure", "ataxia", "hypotonia"]).unwrap();

    // Both bounds reduce to the prior here, up to rounding in the log-space joint.
    for r in &results {
        assert!(
            r.p_low <= r.p_high + 1e-12,
            "{}: {} > {}",
            r.disorder.name(),
            r.p_low,
            r.p_high
        );
    }
}

#[test]
fn test_ties_keep_catalog_order() {
    let ctx = context(vec![
        disorder(1, "First", &[("Seizure", 0.5, 0.5)]),
        disorder(2, "Second", &[("Seizure", 0.5, 0.5)]),
        disorder(3, "Third", &[("Seizure", 0.5, 0.5)]),
    ]);

    let names: Vec<&str> = ctx
        .rank(&["seizure"])
        .unwrap()
        .iter()
        .map(|r| r.disorder.name())
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn test_query_matching_nothing_is_empty() {
    let ctx = neuro_catalog();
    assert!(ctx.rank(&["hyperreflexia"]).unwrap().is_empty());
    assert!(ctx.rank::<&str>(&[]).unwrap().is_empty());
}

#[test]
fn test_query_is_case_insensitive() {
    let ctx = neuro_catalog();
    let lower = ctx.rank(&["seizure"]).unwrap();
    let upper = ctx.rank(&["SEIZURE"]).unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn test_degenerate_range_matches_scalar() {
    let ctx = context(vec![disorder(1, "Point", &[("Microcephaly", 0.2, 0.2)])]);
    let results = ctx.rank(&["microcephaly"]).unwrap();
    assert_eq!(results[0].p_low, results[0].p_high);
}

// Case-insensitive disorder name collisions share one slot in the symptom
// statistics, so the joint for the first disorder is built from the second
// disorder's frequencies. The bounds are then no longer probabilities.
#[test]
fn test_name_collision_breaks_the_unit_interval() {
    let ctx = context(vec![
        disorder(1, "Colliding", &[("Seizure", 0.2, 0.9)]),
        disorder(2, "colliding", &[("Seizure", 0.1, 0.9)]),
    ]);

    let results = ctx.rank(&["seizure"]).unwrap();
    assert_eq!(results.len(), 2);

    let first = results.iter().find(|r| r.disorder.id() == 1).unwrap();
    // low: 0.2 * 0.5 / 0.1
    assert!((first.p_low - 1.0).abs() < 1e-9);
    assert!(first.p_low > first.p_high);
}

#[test]
fn test_name_collision_can_exceed_one() {
    let ctx = context(vec![
        disorder(1, "Colliding", &[("Seizure", 0.9, 0.9)]),
        disorder(2, "colliding", &[("Seizure", 0.1, 0.1)]),
    ]);

    let results = ctx.rank(&["seizure"]).unwrap();
    assert_eq!(results[0].disorder.id(), 1);
    assert!((results[0].p_high - 4.5).abs() < 1e-9);
    assert!((results[1].p_high - 0.5).abs() < 1e-9);
}

#[test]
fn test_global_marginal_model_orders_by_frequency() {
    let ctx = neuro_catalog();
    let options = RankingOptions {
        joint_model: JointModel::GlobalMarginal,
        ..RankingOptions::default()
    };

    let results = ctx.rank_with(&["seizure"], &options).unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.disorder.name()).collect();
    assert_eq!(
        names,
        vec!["Dravet syndrome", "Aicardi syndrome", "Rett syndrome"]
    );
}

#[test]
fn test_rank_never_mutates_context() {
    let ctx = neuro_catalog();
    let before = ctx.statistics().clone();
    let _ = ctx.rank(&["seizure", "ataxia"]).unwrap();
    let _ = ctx.rank(&["short stature"]).unwrap();
    assert_eq!(&before, ctx.statistics());
}

#[test]
fn test_concurrent_queries_share_context() {
    let ctx = std::sync::Arc::new(neuro_catalog());
    let expected = ctx.rank(&["seizure"]).unwrap().len();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ctx = ctx.clone();
            std::thread::spawn(move || ctx.rank(&["seizure"]).unwrap().len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
