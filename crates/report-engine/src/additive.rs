//! 첨가물 스캐너 -- 태그 목록에서 위험 첨가물 탐지
//!
//! [`AdditiveScanner`]는 네임스페이스 태그(`en:e250`)에서 첨가물 코드를 추출하고
//! [`RiskCatalog`]를 조회하여 [`DetectedRisk`] 목록을 만듭니다.
//!
//! # 순서와 중복
//!
//! 결과는 항상 입력 순서를 따릅니다. 기본 정책([`DuplicatePolicy::Preserve`])은
//! 같은 코드가 여러 번 나오면 모두 유지합니다. [`DuplicatePolicy::Collapse`]는
//! 첫 번째 출현만 남깁니다.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use bioscan_core::types::RiskTier;

use crate::catalog::{AdditiveCode, RiskCatalog, RiskEntry};

/// 중복 탐지 처리 정책
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// 모든 출현 유지
    #[default]
    Preserve,
    /// 코드별 첫 출현만 유지
    Collapse,
}

impl DuplicatePolicy {
    /// 문자열에서 정책을 파싱합니다. 대소문자를 구분하지 않습니다.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "preserve" => Some(Self::Preserve),
            "collapse" => Some(Self::Collapse),
            _ => None,
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preserve => write!(f, "preserve"),
            Self::Collapse => write!(f, "collapse"),
        }
    }
}

/// 탐지된 위험 첨가물
///
/// 카탈로그 항목과 그 항목을 일으킨 코드를 묶습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedRisk {
    /// 탐지된 코드
    pub code: AdditiveCode,
    /// 카탈로그 항목
    #[serde(flatten)]
    pub entry: &'static RiskEntry,
}

impl DetectedRisk {
    /// 첨가물 이름
    pub fn name(&self) -> &'static str {
        self.entry.name
    }

    /// 위험 등급
    pub fn tier(&self) -> RiskTier {
        self.entry.tier
    }
}

/// 첨가물 태그 스캐너
#[derive(Debug, Clone, Copy)]
pub struct AdditiveScanner {
    catalog: &'static RiskCatalog,
    policy: DuplicatePolicy,
    min_tier: RiskTier,
}

impl Default for AdditiveScanner {
    fn default() -> Self {
        Self::new(DuplicatePolicy::default(), RiskTier::Moderate)
    }
}

impl AdditiveScanner {
    /// 전역 카탈로그를 사용하는 스캐너를 생성합니다.
    pub fn new(policy: DuplicatePolicy, min_tier: RiskTier) -> Self {
        Self {
            catalog: RiskCatalog::global(),
            policy,
            min_tier,
        }
    }

    /// 중복 정책을 바꾼 스캐너를 반환합니다.
    #[must_use]
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 최소 위험 등급을 바꾼 스캐너를 반환합니다.
    #[must_use]
    pub fn with_min_tier(mut self, min_tier: RiskTier) -> Self {
        self.min_tier = min_tier;
        self
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn min_tier(&self) -> RiskTier {
        self.min_tier
    }

    /// 태그 목록을 스캔합니다.
    ///
    /// 카탈로그에 없는 코드와 빈 태그는 조용히 건너뜁니다.
    pub fn scan<S: AsRef<str>>(&self, tags: &[S]) -> Vec<DetectedRisk> {
        let mut seen = HashSet::new();
        let mut detected = Vec::new();

        for tag in tags {
            let tag = tag.as_ref();
            let Some(code) = AdditiveCode::from_tag(tag) else {
                continue;
            };
            let Some(entry) = self.catalog.lookup(&code) else {
                trace!(tag, code = %code, "additive not in risk catalog");
                continue;
            };
            if entry.tier < self.min_tier {
                continue;
            }
            if self.policy == DuplicatePolicy::Collapse && !seen.insert(code.clone()) {
                continue;
            }
            detected.push(DetectedRisk { code, entry });
        }

        detected
    }
}
