//! 리포트 엔진 설정
//!
//! [`ReportEngineConfig`]는 core의 [`ReportConfig`](bioscan_core::config::ReportConfig)
//! 문자열 값을 타입이 있는 정책으로 변환합니다.
//!
//! # 사용 예시
//!
//! ```
//! use bioscan_core::types::RiskTier;
//! use bioscan_report::{DuplicatePolicy, ReportEngineConfig};
//!
//! let config = ReportEngineConfig::builder()
//!     .duplicate_policy(DuplicatePolicy::Collapse)
//!     .min_tier(RiskTier::High)
//!     .build();
//! assert_eq!(config.min_tier, RiskTier::High);
//! ```

use serde::{Deserialize, Serialize};

use bioscan_core::config::ReportConfig;
use bioscan_core::types::RiskTier;

use crate::additive::DuplicatePolicy;
use crate::error::ReportEngineError;

/// 리포트 엔진 설정
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEngineConfig {
    /// 중복 탐지 처리 방식
    pub duplicate_policy: DuplicatePolicy,
    /// 리포트에 포함할 최소 위험 등급
    pub min_tier: RiskTier,
}

impl ReportEngineConfig {
    /// 빌더를 생성합니다.
    pub fn builder() -> ReportEngineConfigBuilder {
        ReportEngineConfigBuilder::new()
    }

    /// core의 `ReportConfig`에서 설정을 생성합니다.
    ///
    /// # Errors
    ///
    /// 알 수 없는 정책이나 등급 이름이면 [`ReportEngineError::Config`]를 반환합니다.
    pub fn from_core(core: &ReportConfig) -> Result<Self, ReportEngineError> {
        let duplicate_policy =
            DuplicatePolicy::from_str_loose(&core.duplicate_policy).ok_or_else(|| {
                ReportEngineError::Config {
                    field: "duplicate_policy".to_owned(),
                    reason: format!(
                        "unknown policy '{}', expected preserve or collapse",
                        core.duplicate_policy
                    ),
                }
            })?;

        let min_tier =
            RiskTier::from_str_loose(&core.min_tier).ok_or_else(|| ReportEngineError::Config {
                field: "min_tier".to_owned(),
                reason: format!(
                    "unknown tier '{}', expected moderate, high or critical",
                    core.min_tier
                ),
            })?;

        Ok(Self {
            duplicate_policy,
            min_tier,
        })
    }
}

/// [`ReportEngineConfig`] 빌더
#[derive(Default)]
pub struct ReportEngineConfigBuilder {
    config: ReportEngineConfig,
}

impl ReportEngineConfigBuilder {
    /// 기본값을 가진 새 빌더를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 중복 정책을 설정합니다.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    /// 최소 위험 등급을 설정합니다.
    pub fn min_tier(mut self, tier: RiskTier) -> Self {
        self.config.min_tier = tier;
        self
    }

    pub fn build(self) -> ReportEngineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioscan_core::config::BioscanConfig;

    #[test]
    fn default_matches_observed_behavior() {
        let config = ReportEngineConfig::default();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Preserve);
        assert_eq!(config.min_tier, RiskTier::Moderate);
    }

    #[test]
    fn from_core_default_sections() {
        let config = ReportEngineConfig::from_core(&ReportConfig::default()).unwrap();
        assert_eq!(config, ReportEngineConfig::default());
    }

    #[test]
    fn from_core_parses_values() {
        let core = ReportConfig {
            duplicate_policy: "collapse".to_owned(),
            min_tier: "Critical".to_owned(),
        };
        let config = ReportEngineConfig::from_core(&core).unwrap();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Collapse);
        assert_eq!(config.min_tier, RiskTier::Critical);
    }

    #[test]
    fn from_core_rejects_unknown_policy() {
        let core = ReportConfig {
            duplicate_policy: "sometimes".to_owned(),
            ..ReportConfig::default()
        };
        let err = ReportEngineConfig::from_core(&core).unwrap_err();
        assert!(matches!(err, ReportEngineError::Config { ref field, .. } if field == "duplicate_policy"));
    }

    #[test]
    fn from_core_rejects_unknown_tier() {
        let core = ReportConfig {
            min_tier: "low".to_owned(),
            ..ReportConfig::default()
        };
        let err = ReportEngineConfig::from_core(&core).unwrap_err();
        assert!(err.to_string().contains("min_tier"));
    }

    #[test]
    fn validate_and_from_core_agree_on_accepted_values() {
        let cases = [
            ("collapse", "High", true),
            (" Preserve ", "crit", true),
            ("COLLAPSE", "medium", true),
            ("dedup", "high", false),
            ("preserve", "low", false),
            ("sometimes", "severe", false),
        ];

        for (policy, tier, accepted) in cases {
            let toml = format!("[report]\nduplicate_policy = \"{policy}\"\nmin_tier = \"{tier}\"\n");
            let core = BioscanConfig::parse(&toml).unwrap();
            assert_eq!(core.validate().is_ok(), accepted, "validate: {policy}/{tier}");
            assert_eq!(
                ReportEngineConfig::from_core(&core.report).is_ok(),
                accepted,
                "from_core: {policy}/{tier}"
            );
        }
    }

    #[test]
    fn builder_sets_fields() {
        let config = ReportEngineConfigBuilder::new()
            .duplicate_policy(DuplicatePolicy::Collapse)
            .min_tier(RiskTier::High)
            .build();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Collapse);
        assert_eq!(config.min_tier, RiskTier::High);
    }
}
