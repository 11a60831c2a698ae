//! 리포트 엔진 에러 타입
//!
//! [`ReportEngineError`]는 리포트 엔진 경계에서 발생할 수 있는 에러를 나타냅니다.
//! 도메인 데이터 문제(누락 필드, 음수 값, 알 수 없는 첨가물 코드)는 에러가 아니며
//! 여기에 포함되지 않습니다.
//!
//! # 에러 카테고리
//!
//! - **입력 디코딩**: `Decode` (JSON 객체가 아닌 입력)
//! - **설정**: `Config`

use bioscan_core::error::{BioscanError, ReportError};

/// 리포트 엔진 도메인 에러
///
/// # 에러 변환
///
/// `From<ReportEngineError> for BioscanError` 구현으로
/// 최상위 에러 타입으로 자동 변환됩니다.
#[derive(Debug, thiserror::Error)]
pub enum ReportEngineError {
    /// 원시 레코드 디코딩 실패
    #[error("record decode error: {0}")]
    Decode(String),

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },
}

impl From<ReportEngineError> for BioscanError {
    fn from(err: ReportEngineError) -> Self {
        match err {
            ReportEngineError::Decode(msg) => BioscanError::Report(ReportError::Decode(msg)),
            ReportEngineError::Config { field, reason } => {
                BioscanError::Report(ReportError::Setting { field, reason })
            }
        }
    }
}
