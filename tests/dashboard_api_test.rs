// ==========================================
// DashboardApi end-to-end tests
// ==========================================
// Target: CSV snapshot -> dashboard summary for one dimension,
// covering grouping, ABC tiers, MTTC and aging in one pass.
// ==========================================

use std::io::Write;

use chrono::NaiveDate;
use tempfile::NamedTempFile;
use warranty_analytics::{AbcCategory, AbcThresholds, DashboardApi, Dimension};

fn snapshot() -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    write!(
        file,
        "N°,Empreendimento,Garantia Solicitada,Data de Abertura,Encerramento,Data CVCO\n\
         1,Residencial Aurora,Elevadores - Porta,01/02/2024,05/02/2024,01/01/2024\n\
         2,Residencial Aurora,Elevadores - Porta,01/03/2024,03/03/2024,01/01/2024\n\
         3,Residencial Aurora,Elevadores - Porta,01/04/2024,,01/01/2024\n\
         4,Residencial Aurora,Hidráulica - Vazamento,10/02/2024,12/02/2024,01/01/2024\n\
         5,Parque das Flores,Pintura - Descascamento,15/02/2024,,\n"
    )
    .unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn summary_covers_grouping_abc_mttc_and_aging() {
    let api = DashboardApi::new();
    let file = snapshot();
    let (requests, stats) = api.load_requests(file.path()).unwrap();
    assert_eq!(stats.imported, 5);

    let today = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
    let summary = api
        .dashboard_summary(
            &requests,
            Dimension::ConstructiveSystem,
            AbcThresholds::default(),
            today,
        )
        .unwrap();

    assert_eq!(summary.total_requests, 5);
    assert_eq!(summary.closed_requests, 3);
    assert_eq!(summary.open_requests, 2);

    // three constructive systems
    assert_eq!(summary.report.groups.len(), 3);
    let elevators = &summary.report.groups["Elevadores"];
    assert_eq!(elevators.sample_size, 3);
    assert_eq!(elevators.closed_count, 2);
    assert!(elevators.mtbf_hours.is_some());

    // Pintura has no commissioning date and no closed request
    let pintura = &summary.report.groups["Pintura"];
    assert_eq!(pintura.mtbf_hours, None);
    assert_eq!(pintura.mttr_hours, None);
    assert_eq!(pintura.availability_pct, None);

    // ABC over counts 3/1/1 (total 5): 60% A, 80% A, 100% C under 80/95
    assert_eq!(summary.abc.len(), 3);
    assert_eq!(summary.abc[0].group_key, "Elevadores");
    assert_eq!(summary.abc[0].category, AbcCategory::A);
    assert_eq!(summary.abc[2].category, AbcCategory::C);

    // open requests: #3 (19 days) and #5 (65 days)
    assert_eq!(summary.aging.open.total, 2);
    assert_eq!(summary.aging.open.d16_30, 1);
    assert_eq!(summary.aging.open.over_60, 1);

    // closed requests band by closure duration: 4, 2, 2 days
    assert_eq!(summary.aging.closed.total, 3);
    assert_eq!(summary.aging.closed.d0_15, 3);

    // MTTC over closed requests: 4, 2, 2 days
    let mttc = summary.report.mttc_days.unwrap();
    assert!((mttc - 8.0 / 3.0).abs() < 1e-9);
}

#[test]
fn summary_per_dimension_is_independent() {
    let api = DashboardApi::new();
    let file = snapshot();
    let (requests, _) = api.load_requests(file.path()).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();

    let by_development = api
        .dashboard_summary(&requests, Dimension::Development, AbcThresholds::default(), today)
        .unwrap();
    assert_eq!(by_development.report.groups.len(), 2);
    assert!(by_development.report.groups.contains_key("Residencial Aurora"));

    let by_failure = api
        .dashboard_summary(&requests, Dimension::FailureType, AbcThresholds::default(), today)
        .unwrap();
    assert!(by_failure.report.groups.contains_key("Vazamento"));

    // MTTC is global: identical across dimensions
    assert_eq!(
        by_development.report.mttc_days,
        by_failure.report.mttc_days
    );
}

#[test]
fn empty_path_is_rejected_at_the_boundary() {
    let api = DashboardApi::new();
    assert!(api.load_requests("").is_err());
}
