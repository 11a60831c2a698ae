//! 메트릭 상수 및 설명 등록
//!
//! 모든 메트릭의 이름과 설명을 중앙에서 정의합니다.
//! 조회 서비스는 이 상수를 사용하여 `metrics::counter!()`, `metrics::histogram!()`
//! 매크로를 호출합니다. 리포트 조립기는 순수 함수이므로 메트릭을 기록하지 않습니다.
//!
//! # 네이밍 컨벤션
//!
//! - 접두어: `bioscan_`
//! - 접미어: `_total` (counter), `_seconds` (histogram)
//!
//! # 사용 예시
//!
//! ```ignore
//! use bioscan_core::metrics as m;
//!
//! metrics::counter!(m::REPORTS_ASSEMBLED_TOTAL).increment(1);
//! ```

// ─── 레이블 키 상수 ────────────────────────────────────────────────

/// 위험 등급 레이블 키 (moderate, high, critical)
pub const LABEL_TIER: &str = "tier";

/// 결과 레이블 키 (found, not_found, error)
pub const LABEL_RESULT: &str = "result";

// ─── 조회 / 리포트 메트릭 ──────────────────────────────────────────

/// 제품 조회 수 (counter, label: result)
pub const LOOKUPS_TOTAL: &str = "bioscan_lookups_total";

/// 제품 조회 소요 시간 (histogram, 초)
pub const LOOKUP_DURATION_SECONDS: &str = "bioscan_lookup_duration_seconds";

/// 조립된 리포트 수 (counter)
pub const REPORTS_ASSEMBLED_TOTAL: &str = "bioscan_reports_assembled_total";

/// 탐지된 위험 첨가물 수 (counter, label: tier)
pub const RISKS_DETECTED_TOTAL: &str = "bioscan_risks_detected_total";

/// 결과 레이블 값
pub const RESULT_FOUND: &str = "found";
pub const RESULT_NOT_FOUND: &str = "not_found";
pub const RESULT_ERROR: &str = "error";

// ─── 설명 등록 함수 ─────────────────────────────────────────────────

/// 모든 메트릭의 설명(description)을 등록합니다.
///
/// 전역 레코더 설치 후 한 번만 호출해야 합니다.
/// 레코더가 없으면 아무 일도 하지 않습니다.
pub fn describe_all() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!(
        LOOKUPS_TOTAL,
        "Total number of product lookups by result (found, not_found, error)"
    );
    describe_histogram!(
        LOOKUP_DURATION_SECONDS,
        "Time to resolve a barcode to a product record in seconds"
    );
    describe_counter!(
        REPORTS_ASSEMBLED_TOTAL,
        "Total number of scan reports assembled"
    );
    describe_counter!(
        RISKS_DETECTED_TOTAL,
        "Total number of flagged additives detected by risk tier"
    );
}
