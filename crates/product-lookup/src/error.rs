//! 제품 조회 에러 타입
//!
//! 찾지 못한 제품은 에러가 아닙니다 ([`LookupOutcome::NotFound`](crate::LookupOutcome)).
//! 여기에는 저장소 접근 자체가 실패한 경우만 포함됩니다.

use bioscan_core::error::{BioscanError, ConfigError, LookupError};

/// 제품 조회 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum ProductLookupError {
    /// 응답 파일 읽기 실패
    #[error("failed to read '{path}': {reason}")]
    Io {
        /// 파일 경로
        path: String,
        /// 실패 사유
        reason: String,
    },

    /// 응답 파일 크기 초과
    #[error("record '{path}' is {size} bytes (max: {max})")]
    TooLarge {
        /// 파일 경로
        path: String,
        /// 실제 크기
        size: usize,
        /// 허용 최대 크기
        max: usize,
    },

    /// 응답 본문이 JSON 객체가 아님
    #[error("malformed record '{path}': {reason}")]
    Malformed {
        /// 파일 경로
        path: String,
        /// 실패 사유
        reason: String,
    },

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },
}

impl From<ProductLookupError> for BioscanError {
    fn from(err: ProductLookupError) -> Self {
        match err {
            ProductLookupError::Io { path, reason } => {
                BioscanError::Lookup(LookupError::SourceUnavailable(format!("{path}: {reason}")))
            }
            ProductLookupError::TooLarge { size, max, .. } => {
                BioscanError::Lookup(LookupError::TooLarge { size, max })
            }
            ProductLookupError::Malformed { path, reason } => {
                BioscanError::Lookup(LookupError::MalformedResponse(format!("{path}: {reason}")))
            }
            ProductLookupError::Config { field, reason } => {
                BioscanError::Config(ConfigError::InvalidValue {
                    field: format!("lookup.{field}"),
                    reason,
                })
            }
        }
    }
}
