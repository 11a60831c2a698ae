//! 영양 성분 집합과 파생 영양 성분 계산
//!
//! [`NutrientSet`]은 100g 기준 7개 영양 성분 값을 보관하며, 모든 값은 항상 0 이상입니다.
//! 음수, 누락, 비유한(NaN, 무한대) 입력은 생성 시 0으로 강제됩니다.
//!
//! [`compute_derived`]는 원본 데이터의 입력 오류(당류 > 탄수화물 등)로 인해
//! 음수가 될 수 있는 파생 값을 0으로 클램핑합니다.

use serde::Serialize;

use crate::record::RawNutriments;

/// 영양 성분 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    /// 에너지 (kcal)
    Energy,
    /// 당류
    Sugars,
    /// 소금
    Salt,
    /// 포화지방
    SaturatedFat,
    /// 탄수화물
    Carbohydrates,
    /// 지방
    Fat,
    /// 단백질
    Proteins,
}

impl Nutrient {
    /// 모든 영양 성분
    pub const ALL: [Nutrient; 7] = [
        Self::Energy,
        Self::Sugars,
        Self::Salt,
        Self::SaturatedFat,
        Self::Carbohydrates,
        Self::Fat,
        Self::Proteins,
    ];

    /// 원시 레코드의 필드명
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Energy => "energy-kcal_100g",
            Self::Sugars => "sugars_100g",
            Self::Salt => "salt_100g",
            Self::SaturatedFat => "saturated-fat_100g",
            Self::Carbohydrates => "carbohydrates_100g",
            Self::Fat => "fat_100g",
            Self::Proteins => "proteins_100g",
        }
    }

    /// 표시용 이름
    pub fn label(&self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Sugars => "Sugars",
            Self::Salt => "Salt",
            Self::SaturatedFat => "Saturated Fat",
            Self::Carbohydrates => "Carbohydrates",
            Self::Fat => "Fat",
            Self::Proteins => "Proteins",
        }
    }
}

/// 100g 기준 영양 성분 집합
///
/// 생성 후 변경할 수 없습니다. 모든 값은 유한하며 0 이상입니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientSet {
    energy_kcal: f64,
    sugars: f64,
    salt: f64,
    saturated_fat: f64,
    carbohydrates: f64,
    fat: f64,
    proteins: f64,
}

/// 음수, 비유한 값을 0으로 강제합니다.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl NutrientSet {
    /// 모든 값이 0인 집합을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 원시 영양 성분 레코드에서 집합을 생성합니다.
    pub fn from_raw(raw: &RawNutriments) -> Self {
        let read = |v: Option<f64>| sanitize(v.unwrap_or(0.0));
        Self {
            energy_kcal: read(raw.energy_kcal_100g),
            sugars: read(raw.sugars_100g),
            salt: read(raw.salt_100g),
            saturated_fat: read(raw.saturated_fat_100g),
            carbohydrates: read(raw.carbohydrates_100g),
            fat: read(raw.fat_100g),
            proteins: read(raw.proteins_100g),
        }
    }

    /// 한 성분의 값을 바꾼 새 집합을 반환합니다.
    #[must_use]
    pub fn with(mut self, nutrient: Nutrient, value: f64) -> Self {
        let value = sanitize(value);
        match nutrient {
            Nutrient::Energy => self.energy_kcal = value,
            Nutrient::Sugars => self.sugars = value,
            Nutrient::Salt => self.salt = value,
            Nutrient::SaturatedFat => self.saturated_fat = value,
            Nutrient::Carbohydrates => self.carbohydrates = value,
            Nutrient::Fat => self.fat = value,
            Nutrient::Proteins => self.proteins = value,
        }
        self
    }

    /// 성분 값을 반환합니다.
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.energy_kcal,
            Nutrient::Sugars => self.sugars,
            Nutrient::Salt => self.salt,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Fat => self.fat,
            Nutrient::Proteins => self.proteins,
        }
    }

    pub fn energy_kcal(&self) -> f64 {
        self.energy_kcal
    }

    pub fn sugars(&self) -> f64 {
        self.sugars
    }

    pub fn salt(&self) -> f64 {
        self.salt
    }

    pub fn saturated_fat(&self) -> f64 {
        self.saturated_fat
    }

    pub fn carbohydrates(&self) -> f64 {
        self.carbohydrates
    }

    pub fn fat(&self) -> f64 {
        self.fat
    }

    pub fn proteins(&self) -> f64 {
        self.proteins
    }
}

/// 파생 영양 성분
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedNutrients {
    /// 전분 = max(0, 탄수화물 - 당류)
    pub starch: f64,
    /// 불포화지방 = max(0, 지방 - 포화지방)
    pub unsaturated_fat: f64,
}

/// 파생 영양 성분을 계산합니다.
///
/// ```
/// use bioscan_report::{Nutrient, NutrientSet, compute_derived};
///
/// let set = NutrientSet::new()
///     .with(Nutrient::Carbohydrates, 20.0)
///     .with(Nutrient::Sugars, 30.0);
/// assert_eq!(compute_derived(&set).starch, 0.0);
/// ```
pub fn compute_derived(nutrients: &NutrientSet) -> DerivedNutrients {
    DerivedNutrients {
        starch: (nutrients.carbohydrates() - nutrients.sugars()).max(0.0),
        unsaturated_fat: (nutrients.fat() - nutrients.saturated_fat()).max(0.0),
    }
}
