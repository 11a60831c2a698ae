//! 필드 기본값 -- 선택 필드마다 하나의 문서화된 대체값
//!
//! 원시 레코드의 모든 선택 필드는 이 모듈의 접근자를 거쳐 읽습니다.
//! 대체 리터럴은 이곳에만 존재합니다.
//!
//! | 필드 | 기본값 |
//! |------|--------|
//! | `product_name` | `"Unknown"` |
//! | `brands` | `"Unknown"` |
//! | `image_front_url` | 없음 |
//! | `nutriscore_grade` | `"?"` (대문자 변환) |
//! | `nova_group` | 없음 (1~4 밖이거나 정수가 아닌 값도 없음으로 취급) |
//! | `nutriments.*` | `0` |
//! | `additives_tags` | 빈 목록 |
//! | `ingredients_from_palm_oil_n` | `0` |
//! | `ingredients_text` | `"Not Available"` |
//! | `allergens` | 빈 목록 |

use crate::record::RawProductRecord;

/// 제품명/브랜드 기본값
pub const UNKNOWN: &str = "Unknown";

/// 원재료 텍스트 기본값
pub const INGREDIENTS_TEXT: &str = "Not Available";

/// Nutri-Score 기본값
pub const NUTRI_SCORE: &str = "?";

/// 팜유 원재료 수 기본값
pub const PALM_OIL_COUNT: f64 = 0.0;

/// 유효한 NOVA 등급 범위
pub const NOVA_RANGE: std::ops::RangeInclusive<u8> = 1..=4;

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// 제품명
pub fn product_name(raw: &RawProductRecord) -> String {
    non_blank(raw.product_name.as_deref())
        .unwrap_or(UNKNOWN)
        .to_owned()
}

/// 브랜드
pub fn brand(raw: &RawProductRecord) -> String {
    non_blank(raw.brands.as_deref()).unwrap_or(UNKNOWN).to_owned()
}

/// 전면 이미지 URL
pub fn image_url(raw: &RawProductRecord) -> Option<String> {
    non_blank(raw.image_front_url.as_deref()).map(str::to_owned)
}

/// Nutri-Score 등급 (대문자)
pub fn nutri_score_grade(raw: &RawProductRecord) -> String {
    non_blank(raw.nutriscore_grade.as_deref())
        .map(str::to_uppercase)
        .unwrap_or_else(|| NUTRI_SCORE.to_owned())
}

/// NOVA 등급
///
/// 1~4 범위의 정수 값만 인정합니다. 그 밖의 값은 필드가 없는 것과 같습니다.
pub fn nova_group(raw: &RawProductRecord) -> Option<u8> {
    let value = raw.nova_group?;
    if value.fract() != 0.0 || !(1.0..=4.0).contains(&value) {
        return None;
    }
    let group = value as u8;
    NOVA_RANGE.contains(&group).then_some(group)
}

/// 팜유 원재료 포함 여부
pub fn contains_palm_oil(raw: &RawProductRecord) -> bool {
    raw.ingredients_from_palm_oil_n
        .filter(|n| n.is_finite())
        .unwrap_or(PALM_OIL_COUNT)
        > 0.0
}

/// 첨가물 태그 목록
pub fn additives_tags(raw: &RawProductRecord) -> &[String] {
    &raw.additives_tags
}

/// 원시 알레르기 문자열 (없으면 빈 문자열)
pub fn allergens(raw: &RawProductRecord) -> &str {
    raw.allergens.as_deref().unwrap_or("")
}
