//! 설정 관리 -- bioscan.toml 파싱 및 런타임 설정
//!
//! [`BioscanConfig`]는 모든 크레이트의 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`BIOSCAN_LOOKUP_PRODUCT_DIR=/data/products` 형식)
//! 3. 설정 파일 (`bioscan.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), bioscan_core::error::BioscanError> {
//! use bioscan_core::config::BioscanConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = BioscanConfig::load("bioscan.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = BioscanConfig::parse("[report]\nduplicate_policy = \"collapse\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{BioscanError, ConfigError};
use crate::types::RiskTier;

/// 저장된 응답 파일 최대 크기 상한 (16 MiB)
pub const MAX_RECORD_BYTES_LIMIT: usize = 16 * 1024 * 1024;

/// BioScan 통합 설정
///
/// `bioscan.toml` 파일의 최상위 구조를 나타냅니다.
/// 각 크레이트는 자기 섹션만 읽어 사용합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BioscanConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 제품 조회 설정
    #[serde(default)]
    pub lookup: LookupConfig,
    /// 리포트 엔진 설정
    #[serde(default)]
    pub report: ReportConfig,
}

impl BioscanConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    ///
    /// 설정 로딩 순서:
    /// 1. TOML 파일 파싱
    /// 2. 환경변수 오버라이드 적용
    /// 3. 검증
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, BioscanError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 파일이 없으면 기본값에서 시작하는 [`load`](Self::load) 변형입니다.
    ///
    /// CLI는 설정 파일 없이도 동작해야 하므로 이 경로를 사용합니다.
    pub async fn load_or_default(path: impl AsRef<Path>) -> Result<Self, BioscanError> {
        let path = path.as_ref();
        let mut config = match Self::from_file(path).await {
            Ok(config) => config,
            Err(BioscanError::Config(ConfigError::FileNotFound { .. })) => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                Self::default()
            }
            Err(e) => return Err(e),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, BioscanError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BioscanError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                BioscanError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, BioscanError> {
        toml::from_str(toml_str).map_err(|e| {
            BioscanError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `BIOSCAN_{SECTION}_{FIELD}`
    /// 예: `BIOSCAN_REPORT_MIN_TIER=high`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "BIOSCAN_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "BIOSCAN_GENERAL_LOG_FORMAT");

        // Lookup
        override_string(&mut self.lookup.product_dir, "BIOSCAN_LOOKUP_PRODUCT_DIR");
        override_usize(
            &mut self.lookup.max_record_bytes,
            "BIOSCAN_LOOKUP_MAX_RECORD_BYTES",
        );

        // Report
        override_string(
            &mut self.report.duplicate_policy,
            "BIOSCAN_REPORT_DUPLICATE_POLICY",
        );
        override_string(&mut self.report.min_tier, "BIOSCAN_REPORT_MIN_TIER");
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), BioscanError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        if self.lookup.product_dir.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "lookup.product_dir".to_owned(),
                reason: "product_dir must not be empty".to_owned(),
            }
            .into());
        }

        if self.lookup.max_record_bytes == 0 || self.lookup.max_record_bytes > MAX_RECORD_BYTES_LIMIT
        {
            return Err(ConfigError::InvalidValue {
                field: "lookup.max_record_bytes".to_owned(),
                reason: format!("must be 1-{MAX_RECORD_BYTES_LIMIT}"),
            }
            .into());
        }

        // 정책과 등급은 대소문자를 구분하지 않으며 report 엔진과 같은 이름을 받습니다.
        let valid_policies = ["preserve", "collapse"];
        let policy = self.report.duplicate_policy.trim().to_lowercase();
        if !valid_policies.contains(&policy.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "report.duplicate_policy".to_owned(),
                reason: format!("must be one of: {}", valid_policies.join(", ")),
            }
            .into());
        }

        if RiskTier::from_str_loose(&self.report.min_tier).is_none() {
            let valid_tiers = ["moderate", "high", "critical"];
            return Err(ConfigError::InvalidValue {
                field: "report.min_tier".to_owned(),
                reason: format!("must be one of: {}", valid_tiers.join(", ")),
            }
            .into());
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "json".to_owned(),
        }
    }
}

/// 제품 조회 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// 저장된 제품 DB 응답 디렉토리 (`<barcode>.json`)
    pub product_dir: String,
    /// 응답 파일 최대 크기 (바이트)
    pub max_record_bytes: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            product_dir: "./products".to_owned(),
            max_record_bytes: 2 * 1024 * 1024, // 2 MiB
        }
    }
}

/// 리포트 엔진 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// 중복 탐지 처리 방식 (preserve, collapse)
    pub duplicate_policy: String,
    /// 리포트에 포함할 최소 위험 등급 (moderate, high, critical)
    pub min_tier: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: "preserve".to_owned(),
            min_tier: "moderate".to_owned(),
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_usize(target: &mut usize, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<usize>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse usize from env var, ignoring"
            ),
        }
    }
}
