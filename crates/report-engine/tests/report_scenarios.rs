//! 스캔 리포트 시나리오 테스트
//!
//! 원시 JSON 응답에서 출발하여 공개 API만으로 리포트를 검증합니다.

use bioscan_core::types::RiskTier;
use bioscan_report::{
    AdditiveScanner, DuplicatePolicy, GaugeBand, ProductResponse, RawProductRecord,
    ReportAssembler, ReportEngineConfig, RiskCatalog, assemble, normalize_allergens,
    normalize_ingredients_text,
};

fn report_from(json: &str) -> bioscan_report::ScanReport {
    assemble(&RawProductRecord::from_json(json).expect("fixture should decode"))
}

// =============================================================================
// 파생 영양 성분
// =============================================================================

#[test]
fn sugars_above_carbohydrates_clamp_starch_to_zero() {
    let report = report_from(
        r#"{"nutriments": {"sugars_100g": 30, "carbohydrates_100g": 20}}"#,
    );
    assert_eq!(report.derived.starch, 0.0);
    assert_eq!(report.nutrients.sugars(), 30.0);
}

#[test]
fn saturated_above_total_fat_clamps_unsaturated_to_zero() {
    let report = report_from(
        r#"{"nutriments": {"fat_100g": 3, "saturated-fat_100g": "4.5"}}"#,
    );
    assert_eq!(report.derived.unsaturated_fat, 0.0);
}

#[test]
fn negative_nutrients_become_zero() {
    let report = report_from(r#"{"nutriments": {"salt_100g": -1, "proteins_100g": -0.5}}"#);
    assert_eq!(report.nutrients.salt(), 0.0);
    assert_eq!(report.nutrients.proteins(), 0.0);
    assert!(report.visuals.sunburst.iter().all(|s| s.value >= 0.0));
}

// =============================================================================
// 첨가물 탐지
// =============================================================================

#[test]
fn unknown_code_dropped_and_duplicates_preserved_in_order() {
    let report = report_from(r#"{"additives_tags": ["en:e250", "en:e999", "en:e250"]}"#);
    let names: Vec<_> = report.detected_risks.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Sodium Nitrite", "Sodium Nitrite"]);
    assert_eq!(report.tier_counts().critical, 2);
    assert_eq!(report.highest_tier(), Some(RiskTier::Critical));
}

#[test]
fn collapse_policy_deduplicates_for_presentation() {
    let raw =
        RawProductRecord::from_json(r#"{"additives_tags": ["en:e250", "en:e999", "en:e250"]}"#)
            .unwrap();
    let config = ReportEngineConfig::builder()
        .duplicate_policy(DuplicatePolicy::Collapse)
        .build();
    let report = ReportAssembler::new(&config).assemble(&raw);
    assert_eq!(report.detected_risks.len(), 1);
}

#[test]
fn every_catalogued_code_is_detected() {
    let catalog = RiskCatalog::global();
    let tags: Vec<String> = catalog.entries().map(|(code, _)| format!("en:{code}")).collect();
    let risks = AdditiveScanner::default().scan(&tags);
    assert_eq!(risks.len(), catalog.len());
    for (risk, (code, entry)) in risks.iter().zip(catalog.entries()) {
        assert_eq!(risk.code.as_str(), code);
        assert_eq!(risk.entry, entry);
    }
}

#[test]
fn malformed_tag_list_yields_no_risks() {
    let report = report_from(r#"{"additives_tags": {"en:e250": true}}"#);
    assert!(report.detected_risks.is_empty());
    assert!(!report.has_risks());
}

// =============================================================================
// 팜유 / 텍스트 정규화
// =============================================================================

#[test]
fn palm_oil_flag_follows_ingredient_count() {
    assert!(!report_from(r#"{"ingredients_from_palm_oil_n": 0}"#).contains_palm_oil);
    assert!(report_from(r#"{"ingredients_from_palm_oil_n": 2}"#).contains_palm_oil);
    assert!(!report_from("{}").contains_palm_oil);
}

#[test]
fn allergen_namespaces_are_stripped() {
    assert_eq!(normalize_allergens("en:milk,en:nuts"), "milk,nuts");
    let report = report_from(r#"{"allergens": "en:milk,en:nuts"}"#);
    assert_eq!(report.allergens, vec!["milk", "nuts"]);
}

#[test]
fn ingredient_markers_are_removed() {
    assert_eq!(
        normalize_ingredients_text(Some("wheat_flour, sugar_cane")),
        "wheat flour, sugar cane"
    );
    let report = report_from(r#"{"ingredients_text": "wheat_flour, sugar_cane"}"#);
    assert_eq!(report.ingredients_text, "wheat flour, sugar cane");
}

// =============================================================================
// 기본값 / 봉투 / 결정성
// =============================================================================

#[test]
fn sparse_record_still_produces_complete_report() {
    let report = report_from(r#"{"product_name": "Mystery Bar"}"#);
    assert_eq!(report.product_name, "Mystery Bar");
    assert_eq!(report.brand, "Unknown");
    assert_eq!(report.nutri_score_grade, "?");
    assert_eq!(report.ingredients_text, "Not Available");
    assert_eq!(report.visuals.gauges.len(), 3);
    assert!(
        report
            .visuals
            .gauges
            .iter()
            .all(|g| g.band == GaugeBand::Low)
    );
}

#[test]
fn not_found_envelope_never_reaches_assembler() {
    let response = ProductResponse::from_json(r#"{"status": 0}"#).unwrap();
    assert!(response.into_product().is_none());
}

#[test]
fn found_envelope_assembles() {
    let response = ProductResponse::from_json(
        r#"{"status": 1, "product": {"nutriscore_grade": "a", "additives_tags": ["en:e171"]}}"#,
    )
    .unwrap();
    let raw = response.into_product().expect("status 1 with product is found");
    let report = assemble(&raw);
    assert_eq!(report.nutri_score_grade, "A");
    assert!(report.visuals.nutri_score_favourable);
    assert_eq!(report.detected_risks[0].name(), "Titanium Dioxide");
}

#[test]
fn identical_input_yields_identical_serialized_report() {
    let json = r#"{
        "product_name": "Chips",
        "nutriments": {"fat_100g": 34, "saturated-fat_100g": 3.1, "salt_100g": 1.4},
        "additives_tags": ["en:e621", "en:e250", "en:e621"],
        "allergens": "en:milk"
    }"#;
    let a = serde_json::to_string(&report_from(json)).unwrap();
    let b = serde_json::to_string(&report_from(json)).unwrap();
    assert_eq!(a, b);
}
