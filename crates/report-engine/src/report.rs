//! 스캔 리포트 -- 렌더링 계층이 소비하는 유일한 산출물

use serde::Serialize;

use bioscan_core::types::RiskTier;

use crate::additive::DetectedRisk;
use crate::nutrients::{DerivedNutrients, NutrientSet};
use crate::visual::VisualSummary;

/// 제품 한 건의 스캔 리포트
///
/// 조회 한 번마다 새로 만들어지며 호출자가 단독으로 소유합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub product_name: String,
    pub brand: String,
    pub image_url: Option<String>,
    /// 대문자 등급 또는 `"?"`
    pub nutri_score_grade: String,
    pub nova_group: Option<u8>,
    pub nutrients: NutrientSet,
    pub derived: DerivedNutrients,
    /// 입력 태그 순서
    pub detected_risks: Vec<DetectedRisk>,
    pub contains_palm_oil: bool,
    pub ingredients_text: String,
    pub allergens: Vec<String>,
    pub visuals: VisualSummary,
}

impl ScanReport {
    /// 등급별 탐지 수를 집계합니다.
    pub fn tier_counts(&self) -> TierCounts {
        let mut counts = TierCounts::default();
        for risk in &self.detected_risks {
            counts.record(risk.tier());
        }
        counts
    }

    /// 탐지된 가장 높은 위험 등급
    pub fn highest_tier(&self) -> Option<RiskTier> {
        self.detected_risks.iter().map(DetectedRisk::tier).max()
    }

    /// 위험 첨가물이 하나라도 탐지되었는지 여부
    pub fn has_risks(&self) -> bool {
        !self.detected_risks.is_empty()
    }
}

/// 위험 등급별 탐지 수
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub moderate: usize,
    pub high: usize,
    pub critical: usize,
}

impl TierCounts {
    fn record(&mut self, tier: RiskTier) {
        match tier {
            RiskTier::Moderate => self.moderate += 1,
            RiskTier::High => self.high += 1,
            RiskTier::Critical => self.critical += 1,
        }
    }

    pub fn get(&self, tier: RiskTier) -> usize {
        match tier {
            RiskTier::Moderate => self.moderate,
            RiskTier::High => self.high,
            RiskTier::Critical => self.critical,
        }
    }

    pub fn total(&self) -> usize {
        self.moderate + self.high + self.critical
    }
}

#[cfg(test)]
mod tests {
    use crate::assembler::ReportAssembler;
    use crate::record::RawProductRecord;

    use super::*;

    fn report_with_tags(tags: &[&str]) -> ScanReport {
        let raw = RawProductRecord {
            additives_tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            ..RawProductRecord::default()
        };
        ReportAssembler::default().assemble(&raw)
    }

    #[test]
    fn tier_counts_tally_each_occurrence() {
        let report = report_with_tags(&["en:e250", "en:e250", "en:e211", "en:e621"]);
        let counts = report.tier_counts();
        assert_eq!(counts.critical, 2);
        assert_eq!(counts.high, 1);
        assert_eq!(counts.moderate, 1);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get(RiskTier::Critical), 2);
    }

    #[test]
    fn highest_tier_and_has_risks() {
        let report = report_with_tags(&["en:e621", "en:e951"]);
        assert_eq!(report.highest_tier(), Some(RiskTier::High));
        assert!(report.has_risks());

        let clean = report_with_tags(&["en:e330"]);
        assert_eq!(clean.highest_tier(), None);
        assert!(!clean.has_risks());
        assert_eq!(clean.tier_counts(), TierCounts::default());
    }
}
