//! 시각화 데이터 -- 위험 게이지와 칼로리 구성 선버스트
//!
//! 렌더링 계층이 그대로 그릴 수 있도록 값과 구간만 계산합니다. 색상이나 레이아웃은 다루지 않습니다.

use serde::Serialize;

use crate::nutrients::{DerivedNutrients, NutrientSet};

/// 게이지 구간
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeBand {
    /// 낮음
    Low,
    /// 주의
    Elevated,
    /// 과다
    Excessive,
}

/// 게이지 정의
///
/// 구간 경계값은 아래 구간에 속합니다 (`value <= low_max`면 `Low`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeSpec {
    pub label: &'static str,
    pub max: f64,
    pub low_max: f64,
    pub elevated_max: f64,
}

impl GaugeSpec {
    pub const SUGAR: GaugeSpec = GaugeSpec {
        label: "Sugar",
        max: 50.0,
        low_max: 5.0,
        elevated_max: 22.0,
    };

    pub const SALT: GaugeSpec = GaugeSpec {
        label: "Salt",
        max: 3.0,
        low_max: 0.5,
        elevated_max: 1.5,
    };

    pub const SATURATED_FAT: GaugeSpec = GaugeSpec {
        label: "Sat. Fat",
        max: 20.0,
        low_max: 1.5,
        elevated_max: 5.0,
    };

    /// 값이 속하는 구간을 반환합니다.
    pub fn band_for(&self, value: f64) -> GaugeBand {
        if value <= self.low_max {
            GaugeBand::Low
        } else if value <= self.elevated_max {
            GaugeBand::Elevated
        } else {
            GaugeBand::Excessive
        }
    }

    /// 값을 읽어 게이지 눈금을 만듭니다. `max`를 넘는 값도 그대로 유지합니다.
    pub fn read(&self, value: f64) -> GaugeReading {
        GaugeReading {
            label: self.label,
            value,
            max: self.max,
            band: self.band_for(value),
        }
    }
}

/// 게이지 눈금
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeReading {
    pub label: &'static str,
    pub value: f64,
    pub max: f64,
    pub band: GaugeBand,
}

/// 선버스트 조각
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunburstSegment {
    pub label: &'static str,
    /// 상위 조각 라벨 (최상위면 빈 문자열)
    pub parent: &'static str,
    pub value: f64,
}

impl SunburstSegment {
    fn new(label: &'static str, parent: &'static str, value: f64) -> Self {
        Self {
            label,
            parent,
            value: value.max(0.0),
        }
    }
}

/// 렌더링 계층 입력 요약
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualSummary {
    /// 당류, 소금, 포화지방 순
    pub gauges: Vec<GaugeReading>,
    /// 고정 순서 8개 조각
    pub sunburst: Vec<SunburstSegment>,
    /// Nutri-Score A 또는 B
    pub nutri_score_favourable: bool,
}

impl VisualSummary {
    pub fn build(nutrients: &NutrientSet, derived: &DerivedNutrients, nutri_score: &str) -> Self {
        Self {
            gauges: gauges(nutrients),
            sunburst: sunburst(nutrients, derived),
            nutri_score_favourable: is_favourable_grade(nutri_score),
        }
    }
}

/// 위험 게이지 3종을 계산합니다.
pub fn gauges(nutrients: &NutrientSet) -> Vec<GaugeReading> {
    vec![
        GaugeSpec::SUGAR.read(nutrients.sugars()),
        GaugeSpec::SALT.read(nutrients.salt()),
        GaugeSpec::SATURATED_FAT.read(nutrients.saturated_fat()),
    ]
}

/// 칼로리 구성 선버스트 조각을 계산합니다.
pub fn sunburst(nutrients: &NutrientSet, derived: &DerivedNutrients) -> Vec<SunburstSegment> {
    vec![
        SunburstSegment::new("Carbs", "", nutrients.carbohydrates()),
        SunburstSegment::new("Sugars", "Carbs", nutrients.sugars()),
        SunburstSegment::new("Starches", "Carbs", derived.starch),
        SunburstSegment::new("Fat", "", nutrients.fat()),
        SunburstSegment::new("Saturated", "Fat", nutrients.saturated_fat()),
        SunburstSegment::new("Unsaturated", "Fat", derived.unsaturated_fat),
        SunburstSegment::new("Protein", "", nutrients.proteins()),
        SunburstSegment::new("Salt", "", nutrients.salt()),
    ]
}

/// Nutri-Score A, B는 양호 등급입니다.
pub fn is_favourable_grade(grade: &str) -> bool {
    matches!(grade.trim().to_ascii_uppercase().as_str(), "A" | "B")
}
