//! 조회 설정
//!
//! [`LookupSettings`]는 core의 [`LookupConfig`]에서 파생됩니다.

use std::path::PathBuf;

use bioscan_core::config::{LookupConfig, MAX_RECORD_BYTES_LIMIT};

use crate::error::ProductLookupError;

/// 디렉토리 조회 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSettings {
    /// 저장된 응답 디렉토리
    pub product_dir: PathBuf,
    /// 응답 파일 최대 크기 (바이트)
    pub max_record_bytes: usize,
}

impl Default for LookupSettings {
    fn default() -> Self {
        let core = LookupConfig::default();
        Self {
            product_dir: PathBuf::from(core.product_dir),
            max_record_bytes: core.max_record_bytes,
        }
    }
}

impl LookupSettings {
    /// core의 `LookupConfig`에서 설정을 생성하고 검증합니다.
    pub fn from_core(core: &LookupConfig) -> Result<Self, ProductLookupError> {
        let settings = Self {
            product_dir: PathBuf::from(&core.product_dir),
            max_record_bytes: core.max_record_bytes,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// 설정 값의 유효성을 검증합니다.
    ///
    /// - `product_dir`: 비어 있으면 안 됨
    /// - `max_record_bytes`: 1-16777216
    pub fn validate(&self) -> Result<(), ProductLookupError> {
        if self.product_dir.as_os_str().is_empty() {
            return Err(ProductLookupError::Config {
                field: "product_dir".to_owned(),
                reason: "product_dir must not be empty".to_owned(),
            });
        }

        if self.max_record_bytes == 0 || self.max_record_bytes > MAX_RECORD_BYTES_LIMIT {
            return Err(ProductLookupError::Config {
                field: "max_record_bytes".to_owned(),
                reason: format!("must be 1-{MAX_RECORD_BYTES_LIMIT}"),
            });
        }

        Ok(())
    }

    pub fn builder() -> LookupSettingsBuilder {
        LookupSettingsBuilder::default()
    }
}

/// [`LookupSettings`] 빌더
#[derive(Default)]
pub struct LookupSettingsBuilder {
    settings: LookupSettings,
}

impl LookupSettingsBuilder {
    /// 응답 디렉토리를 설정합니다.
    pub fn product_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.settings.product_dir = dir.into();
        self
    }

    /// 최대 파일 크기를 설정합니다.
    pub fn max_record_bytes(mut self, max: usize) -> Self {
        self.settings.max_record_bytes = max;
        self
    }

    /// 설정을 검증하고 빌드합니다.
    ///
    /// # Errors
    ///
    /// 유효성 검증 실패 시 `ProductLookupError::Config` 반환
    pub fn build(self) -> Result<LookupSettings, ProductLookupError> {
        self.settings.validate()?;
        Ok(self.settings)
    }
}
