//! 텍스트 정규화 -- 알레르기 목록과 원재료 텍스트 정리

use crate::defaults;

/// 알레르기 문자열을 항목 목록으로 정규화합니다.
///
/// 쉼표로 나누고, 각 항목을 트림하고, 마지막 `:` 앞의 언어 네임스페이스를 제거합니다.
/// 빈 항목은 버립니다.
pub fn allergen_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| {
            let item = item.trim();
            item.rsplit_once(':').map_or(item, |(_, tail)| tail).trim()
        })
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// 알레르기 문자열을 정규화하여 쉼표로 다시 연결합니다.
///
/// ```
/// use bioscan_report::normalize_allergens;
///
/// assert_eq!(normalize_allergens("en:milk,en:nuts"), "milk,nuts");
/// ```
pub fn normalize_allergens(raw: &str) -> String {
    allergen_list(raw).join(",")
}

/// 원재료 텍스트의 밑줄 표식을 정리합니다.
///
/// 두 영숫자 사이의 밑줄 연속은 공백 하나가 되고, 그 외의 밑줄 연속(강조 표식)은 제거됩니다.
/// 다른 문자는 바뀌지 않습니다. 텍스트가 없거나 공백뿐이면 `"Not Available"`을 반환합니다.
///
/// ```
/// use bioscan_report::normalize_ingredients_text;
///
/// assert_eq!(
///     normalize_ingredients_text(Some("wheat_flour, sugar_cane")),
///     "wheat flour, sugar cane"
/// );
/// assert_eq!(normalize_ingredients_text(Some("_milk_ powder")), "milk powder");
/// assert_eq!(normalize_ingredients_text(None), "Not Available");
/// ```
pub fn normalize_ingredients_text(raw: Option<&str>) -> String {
    let Some(text) = raw.filter(|t| !t.trim().is_empty()) else {
        return defaults::INGREDIENTS_TEXT.to_owned();
    };

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '_' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i] == '_' {
            i += 1;
        }
        let joins_words = start > 0
            && chars[start - 1].is_alphanumeric()
            && chars.get(i).is_some_and(|c| c.is_alphanumeric());
        if joins_words {
            out.push(' ');
        }
    }

    if out.trim().is_empty() {
        defaults::INGREDIENTS_TEXT.to_owned()
    } else {
        out
    }
}
