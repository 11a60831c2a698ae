//! 리포트 조립기 -- 원시 레코드를 [`ScanReport`]로 변환
//!
//! [`ReportAssembler`]는 영양 성분 계산, 첨가물 스캔, 텍스트 정규화, 시각화 데이터를
//! 하나의 리포트로 묶습니다. I/O가 없는 동기 함수이며, 같은 입력은 항상 같은 리포트를 만듭니다.
//! 찾지 못한 제품은 조회 계층에서 걸러지므로 이 조립기에 도달하지 않습니다.

use tracing::debug;

use crate::additive::AdditiveScanner;
use crate::config::ReportEngineConfig;
use crate::defaults;
use crate::normalize::{allergen_list, normalize_ingredients_text};
use crate::nutrients::{NutrientSet, compute_derived};
use crate::record::RawProductRecord;
use crate::report::ScanReport;
use crate::visual::VisualSummary;

/// 리포트 조립기
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportAssembler {
    scanner: AdditiveScanner,
}

impl ReportAssembler {
    /// 설정으로 조립기를 생성합니다.
    pub fn new(config: &ReportEngineConfig) -> Self {
        Self {
            scanner: AdditiveScanner::new(config.duplicate_policy, config.min_tier),
        }
    }

    /// 스캐너를 직접 지정하여 조립기를 생성합니다.
    pub fn with_scanner(scanner: AdditiveScanner) -> Self {
        Self { scanner }
    }

    pub fn scanner(&self) -> &AdditiveScanner {
        &self.scanner
    }

    /// 원시 레코드에서 리포트를 조립합니다.
    pub fn assemble(&self, raw: &RawProductRecord) -> ScanReport {
        let nutrients = NutrientSet::from_raw(&raw.nutriments);
        let derived = compute_derived(&nutrients);
        let detected_risks = self.scanner.scan(defaults::additives_tags(raw));
        let nutri_score_grade = defaults::nutri_score_grade(raw);
        let visuals = VisualSummary::build(&nutrients, &derived, &nutri_score_grade);

        let report = ScanReport {
            product_name: defaults::product_name(raw),
            brand: defaults::brand(raw),
            image_url: defaults::image_url(raw),
            nutri_score_grade,
            nova_group: defaults::nova_group(raw),
            nutrients,
            derived,
            detected_risks,
            contains_palm_oil: defaults::contains_palm_oil(raw),
            ingredients_text: normalize_ingredients_text(raw.ingredients_text.as_deref()),
            allergens: allergen_list(defaults::allergens(raw)),
            visuals,
        };

        debug!(
            product = %report.product_name,
            tags = raw.additives_tags.len(),
            risks = report.detected_risks.len(),
            palm_oil = report.contains_palm_oil,
            "scan report assembled"
        );

        report
    }
}

/// 기본 설정으로 리포트를 조립합니다.
pub fn assemble(raw: &RawProductRecord) -> ScanReport {
    ReportAssembler::default().assemble(raw)
}
