//! 도메인 타입 -- 시스템 전역에서 사용되는 공통 타입
//!
//! 리포트 엔진, 조회 계층, CLI가 공유하는 값 타입을 정의합니다.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BioscanError;

/// 바코드 최대 길이 (자릿수)
const MAX_BARCODE_LEN: usize = 32;

/// 첨가물 위험 등급
///
/// 정적 위험 카탈로그가 첨가물마다 부여하는 대략적인 심각도입니다.
/// `Ord` 구현으로 비교가 가능합니다 (`Moderate < High < Critical`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskTier {
    /// 주의 필요
    #[default]
    Moderate,
    /// 높은 위험
    High,
    /// 치명적 -- 섭취 회피 권장
    Critical,
}

impl RiskTier {
    /// 모든 등급 (낮은 순)
    pub const ALL: [RiskTier; 3] = [Self::Moderate, Self::High, Self::Critical];

    /// 문자열에서 위험 등급을 파싱합니다.
    ///
    /// 대소문자를 구분하지 않습니다.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "moderate" | "mod" | "medium" => Some(Self::Moderate),
            "high" => Some(Self::High),
            "critical" | "crit" => Some(Self::Critical),
            _ => None,
        }
    }

    /// 메트릭 레이블 등에 쓰는 소문자 이름
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// 제품 바코드
///
/// 바코드 디코더나 수동 입력으로 얻은 숫자 문자열입니다.
/// 생성 시 앞뒤 공백을 제거하고 숫자만 허용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Barcode(String);

impl Barcode {
    /// 문자열을 검증하여 바코드를 생성합니다.
    ///
    /// # Errors
    ///
    /// 비어 있거나, 32자를 넘거나, 숫자가 아닌 문자가 있으면
    /// `BioscanError::InvalidBarcode`를 반환합니다.
    pub fn parse(raw: &str) -> Result<Self, BioscanError> {
        let trimmed = raw.trim();
        let invalid = |reason: &str| BioscanError::InvalidBarcode {
            value: raw.to_owned(),
            reason: reason.to_owned(),
        };

        if trimmed.is_empty() {
            return Err(invalid("barcode must not be empty"));
        }
        if trimmed.len() > MAX_BARCODE_LEN {
            return Err(invalid(&format!(
                "barcode exceeds {MAX_BARCODE_LEN} digits"
            )));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("barcode must contain digits only"));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// 바코드 문자열을 반환합니다.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Barcode {
    type Error = BioscanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Barcode> for String {
    fn from(barcode: Barcode) -> Self {
        barcode.0
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
