//! 에러 타입 -- 도메인별 에러 정의
//!
//! 리포트 조립 자체는 도메인 데이터 문제로 실패하지 않습니다.
//! 여기 정의된 에러는 설정, 입력 디코딩, 조회 경계에서만 발생합니다.

/// BioScan 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum BioscanError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 제품 조회 에러
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// 리포트 입력 처리 에러
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// 사용자가 입력한 바코드가 유효하지 않음
    #[error("invalid barcode '{value}': {reason}")]
    InvalidBarcode { value: String, reason: String },

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 제품 조회 에러
///
/// "제품 없음"은 에러가 아니라 정상 결과입니다. 여기에는 조회 자체가 실패한 경우만 포함됩니다.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// 저장된 응답 파일 읽기 실패
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    /// 응답 본문 디코딩 실패
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// 응답 크기 초과
    #[error("response too large: {size} bytes (max: {max})")]
    TooLarge { size: usize, max: usize },
}

/// 리포트 입력 처리 에러
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// 원시 레코드가 JSON 객체가 아님
    #[error("record decode failed: {0}")]
    Decode(String),

    /// 리포트 엔진 설정 오류
    #[error("invalid report setting '{field}': {reason}")]
    Setting { field: String, reason: String },
}
