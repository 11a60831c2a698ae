//! 원시 제품 레코드 -- 제품 데이터베이스 응답 디코딩
//!
//! 제품 데이터베이스는 필드 형식이 일정하지 않습니다. 같은 숫자 필드가 JSON 숫자일 수도,
//! 문자열(`"4"`)일 수도, 아예 빠져 있을 수도 있습니다.
//! 이 모듈은 모든 필드를 관대하게(lenient) 디코딩합니다:
//!
//! - 숫자 필드: JSON 숫자 또는 숫자 문자열을 허용하고, 그 외 형태는 부재(`None`)로 처리
//! - 텍스트 필드: 문자열을 허용하고 숫자는 문자열로 변환, 그 외 형태는 부재
//! - 목록 필드: 배열의 문자열 항목만 유지
//!
//! 입력이 JSON 객체가 아닌 경우에만 [`ReportEngineError::Decode`]를 반환합니다.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ReportEngineError;

/// 제품 데이터베이스 응답 봉투
///
/// `status == 1`이고 `product` 객체가 있을 때만 제품을 찾은 것으로 간주합니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductResponse {
    /// 응답 상태 (1 = 찾음)
    #[serde(deserialize_with = "lenient_number")]
    pub status: Option<f64>,
    /// 제품 객체 (객체가 아니면 `None`)
    #[serde(deserialize_with = "lenient_object")]
    pub product: Option<Value>,
}

impl ProductResponse {
    /// JSON 문자열에서 응답 봉투를 디코딩합니다.
    pub fn from_json(input: &str) -> Result<Self, ReportEngineError> {
        let value = parse_object(input)?;
        serde_json::from_value(value).map_err(|e| ReportEngineError::Decode(e.to_string()))
    }

    /// 제품을 찾았는지 여부
    pub fn is_found(&self) -> bool {
        self.status == Some(1.0) && self.product.is_some()
    }

    /// 찾은 제품의 원시 레코드를 반환합니다.
    ///
    /// 찾지 못한 경우 `None`을 반환합니다.
    pub fn into_product(self) -> Option<RawProductRecord> {
        if !self.is_found() {
            return None;
        }
        self.product.and_then(|v| RawProductRecord::from_value(v).ok())
    }
}

/// 원시 제품 레코드
///
/// 모든 필드는 선택적입니다. 누락 필드의 기본값은 [`crate::defaults`]가 결정합니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawProductRecord {
    /// 제품명
    #[serde(deserialize_with = "lenient_text")]
    pub product_name: Option<String>,
    /// 브랜드
    #[serde(deserialize_with = "lenient_text")]
    pub brands: Option<String>,
    /// 전면 이미지 URL
    #[serde(deserialize_with = "lenient_text")]
    pub image_front_url: Option<String>,
    /// Nutri-Score 등급 (원본 대소문자 유지)
    #[serde(deserialize_with = "lenient_text")]
    pub nutriscore_grade: Option<String>,
    /// NOVA 가공 등급
    #[serde(deserialize_with = "lenient_number")]
    pub nova_group: Option<f64>,
    /// 영양 성분 하위 레코드
    #[serde(deserialize_with = "lenient_nutriments")]
    pub nutriments: RawNutriments,
    /// 첨가물 태그 목록 (예: `en:e250`)
    #[serde(deserialize_with = "lenient_string_list")]
    pub additives_tags: Vec<String>,
    /// 팜유 유래 원재료 수
    #[serde(deserialize_with = "lenient_number")]
    pub ingredients_from_palm_oil_n: Option<f64>,
    /// 원재료 텍스트
    #[serde(deserialize_with = "lenient_text")]
    pub ingredients_text: Option<String>,
    /// 알레르기 유발 성분 (쉼표 구분, 배열이면 쉼표로 연결)
    #[serde(deserialize_with = "lenient_allergens")]
    pub allergens: Option<String>,
}

impl RawProductRecord {
    /// JSON 문자열에서 레코드를 디코딩합니다.
    ///
    /// # Errors
    ///
    /// 입력이 JSON 객체가 아니면 [`ReportEngineError::Decode`]를 반환합니다.
    pub fn from_json(input: &str) -> Result<Self, ReportEngineError> {
        Self::from_value(parse_object(input)?)
    }

    /// 이미 파싱된 JSON 값에서 레코드를 디코딩합니다.
    pub fn from_value(value: Value) -> Result<Self, ReportEngineError> {
        if !value.is_object() {
            return Err(ReportEngineError::Decode(format!(
                "expected a JSON object, found {}",
                kind_of(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| ReportEngineError::Decode(e.to_string()))
    }

    /// 응답 봉투 또는 단독 제품 객체를 디코딩합니다.
    ///
    /// `status` 또는 `product` 키가 있으면 봉투로 해석하고, 찾지 못한 응답이면
    /// `Ok(None)`을 반환합니다. `status`가 없는 봉투도 찾지 못한 응답입니다.
    pub fn from_envelope_or_product(input: &str) -> Result<Option<Self>, ReportEngineError> {
        let value = parse_object(input)?;
        if value.get("status").is_some() || value.get("product").is_some() {
            let response: ProductResponse = serde_json::from_value(value)
                .map_err(|e| ReportEngineError::Decode(e.to_string()))?;
            return Ok(response.into_product());
        }
        Self::from_value(value).map(Some)
    }
}

/// 영양 성분 하위 레코드 (100g 기준)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawNutriments {
    /// 에너지 (kcal)
    #[serde(rename = "energy-kcal_100g", deserialize_with = "lenient_number")]
    pub energy_kcal_100g: Option<f64>,
    /// 당류
    #[serde(rename = "sugars_100g", deserialize_with = "lenient_number")]
    pub sugars_100g: Option<f64>,
    /// 나트륨(소금)
    #[serde(rename = "salt_100g", deserialize_with = "lenient_number")]
    pub salt_100g: Option<f64>,
    /// 포화지방
    #[serde(rename = "saturated-fat_100g", deserialize_with = "lenient_number")]
    pub saturated_fat_100g: Option<f64>,
    /// 탄수화물
    #[serde(rename = "carbohydrates_100g", deserialize_with = "lenient_number")]
    pub carbohydrates_100g: Option<f64>,
    /// 지방
    #[serde(rename = "fat_100g", deserialize_with = "lenient_number")]
    pub fat_100g: Option<f64>,
    /// 단백질
    #[serde(rename = "proteins_100g", deserialize_with = "lenient_number")]
    pub proteins_100g: Option<f64>,
}

// --- 관대한 디코딩 헬퍼 ---

fn parse_object(input: &str) -> Result<Value, ReportEngineError> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| ReportEngineError::Decode(e.to_string()))?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(ReportEngineError::Decode(format!(
            "expected a JSON object, found {}",
            kind_of(&value)
        )))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_of(&value))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(&value))
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_allergens<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => {
            let joined: Vec<String> = items.iter().filter_map(text_of).collect();
            Some(joined.join(","))
        }
        other => text_of(&other),
    })
}

fn lenient_nutriments<'de, D>(deserializer: D) -> Result<RawNutriments, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(RawNutriments::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_object<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.is_object().then_some(value))
}
