// ==========================================
// AbcClassifier integration tests
// ==========================================
// Target: cumulative-share tiering, deterministic tie-breaks,
// threshold validation.
// ==========================================

use std::collections::BTreeMap;
use warranty_analytics::{AbcCategory, AbcClassifier, AbcThresholds};

fn counts(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn literal_fixture_70_90_yields_a_b_b_c() {
    // counts 100/50/30/20, total 200, cumulative 50/75/90/100 %
    let classifier = AbcClassifier::new(AbcThresholds::new(70.0, 90.0).unwrap());
    let entries = classifier.classify(&counts(&[
        ("Estrutura", 100),
        ("Hidráulica", 50),
        ("Elétrica", 30),
        ("Esquadrias", 20),
    ]));

    let keys: Vec<&str> = entries.iter().map(|e| e.group_key.as_str()).collect();
    assert_eq!(keys, vec!["Estrutura", "Hidráulica", "Elétrica", "Esquadrias"]);

    let categories: Vec<AbcCategory> = entries.iter().map(|e| e.category).collect();
    assert_eq!(
        categories,
        vec![AbcCategory::A, AbcCategory::B, AbcCategory::B, AbcCategory::C]
    );

    let cumulative: Vec<f64> = entries.iter().map(|e| e.cumulative_pct).collect();
    assert_eq!(cumulative, vec![50.0, 75.0, 90.0, 100.0]);
}

#[test]
fn default_thresholds_are_80_95() {
    let thresholds = AbcThresholds::default();
    assert_eq!(thresholds.a_pct(), 80.0);
    assert_eq!(thresholds.b_pct(), 95.0);

    // same fixture under 80/95: 50->A, 75->A, 90->B, 100->C
    let classifier = AbcClassifier::new(thresholds);
    let entries = classifier.classify(&counts(&[
        ("Estrutura", 100),
        ("Hidráulica", 50),
        ("Elétrica", 30),
        ("Esquadrias", 20),
    ]));
    let categories: Vec<AbcCategory> = entries.iter().map(|e| e.category).collect();
    assert_eq!(
        categories,
        vec![AbcCategory::A, AbcCategory::A, AbcCategory::B, AbcCategory::C]
    );
}

#[test]
fn equal_counts_break_ties_by_group_key() {
    let classifier = AbcClassifier::new(AbcThresholds::default());
    let entries = classifier.classify(&counts(&[
        ("Pintura", 10),
        ("Alvenaria", 10),
        ("Cobertura", 10),
    ]));

    let keys: Vec<&str> = entries.iter().map(|e| e.group_key.as_str()).collect();
    assert_eq!(keys, vec!["Alvenaria", "Cobertura", "Pintura"]);
}

#[test]
fn single_group_takes_the_whole_share() {
    let classifier = AbcClassifier::new(AbcThresholds::default());
    let entries = classifier.classify(&counts(&[("Estrutura", 7)]));

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].cumulative_pct, 100.0);
    assert_eq!(entries[0].category, AbcCategory::C);
}

#[test]
fn invalid_thresholds_are_rejected_before_computation() {
    assert!(AbcThresholds::new(90.0, 70.0).is_err());
    assert!(AbcThresholds::new(50.0, 50.0).is_err());
    assert!(AbcThresholds::new(0.0, 50.0).is_err());
    assert!(AbcThresholds::new(50.0, 100.0).is_err());
}
