//! 위험 첨가물 카탈로그 -- 정적 첨가물 코드 → 위험 정보 테이블
//!
//! [`RiskCatalog`]는 12개의 알려진 첨가물 코드를 위험 등급과 설명에 매핑합니다.
//! 테이블은 컴파일 타임 상수이며, 인덱스는 프로세스 시작 후 최초 접근 시 한 번 구축됩니다.
//! 런타임에 항목을 추가하거나 변경할 수 없으므로 동기화 없이 여러 스레드에서 읽어도 안전합니다.
//!
//! # 코드 형식
//!
//! 카탈로그 키는 소문자로 정규화된 첨가물 코드입니다 (예: `e250`, `e150d`).
//! 네임스페이스가 붙은 태그(`en:e250`)는 [`AdditiveCode::from_tag`]로 변환합니다.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use bioscan_core::types::RiskTier;

/// 정규화된 첨가물 코드
///
/// 항상 앞뒤 공백이 제거된 소문자 문자열입니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AdditiveCode(String);

impl AdditiveCode {
    /// 문자열을 정규화하여 코드를 생성합니다.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// 네임스페이스가 붙을 수 있는 태그에서 코드를 추출합니다.
    ///
    /// 마지막 `:` 뒤의 세그먼트를 사용합니다. 결과가 비어 있으면 `None`을 반환합니다.
    ///
    /// ```
    /// use bioscan_report::AdditiveCode;
    ///
    /// assert_eq!(AdditiveCode::from_tag("en:E250").unwrap().as_str(), "e250");
    /// assert_eq!(AdditiveCode::from_tag("e621").unwrap().as_str(), "e621");
    /// assert!(AdditiveCode::from_tag("en:").is_none());
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        let segment = tag.rsplit_once(':').map_or(tag, |(_, tail)| tail);
        let code = Self::new(segment);
        if code.0.is_empty() { None } else { Some(code) }
    }

    /// 코드 문자열을 반환합니다.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdditiveCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 카탈로그 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskEntry {
    /// 첨가물 일반명
    pub name: &'static str,
    /// 위험 등급
    pub tier: RiskTier,
    /// 위험 설명
    pub description: &'static str,
}

/// 카탈로그 원본 테이블 (정규 순서)
const CATALOG_TABLE: [(&str, RiskEntry); 12] = [
    (
        "e250",
        RiskEntry {
            name: "Sodium Nitrite",
            tier: RiskTier::Critical,
            description: "Carcinogenic link (colon cancer). Used in bacon/ham.",
        },
    ),
    (
        "e251",
        RiskEntry {
            name: "Sodium Nitrate",
            tier: RiskTier::Critical,
            description: "Damages blood vessels; heart disease risk.",
        },
    ),
    (
        "e211",
        RiskEntry {
            name: "Sodium Benzoate",
            tier: RiskTier::High,
            description: "Can damage DNA mitochondria; hyperactivity.",
        },
    ),
    (
        "e621",
        RiskEntry {
            name: "MSG",
            tier: RiskTier::Moderate,
            description: "Excitotoxin; overstimulates brain cells.",
        },
    ),
    (
        "e951",
        RiskEntry {
            name: "Aspartame",
            tier: RiskTier::High,
            description: "Breakdown products (methanol) are toxic; debated carcinogen.",
        },
    ),
    (
        "e133",
        RiskEntry {
            name: "Blue 1",
            tier: RiskTier::Moderate,
            description: "Banned in Norway/Finland/France; hypersensitivity.",
        },
    ),
    (
        "e171",
        RiskEntry {
            name: "Titanium Dioxide",
            tier: RiskTier::Critical,
            description: "Nanoparticles accumulate in organs; DNA damage.",
        },
    ),
    (
        "e102",
        RiskEntry {
            name: "Yellow 5 (Tartrazine)",
            tier: RiskTier::High,
            description: "Genotoxic; thyroid tumors in animals.",
        },
    ),
    (
        "e320",
        RiskEntry {
            name: "BHA",
            tier: RiskTier::Critical,
            description: "Endocrine disruptor; specifically targets hormones.",
        },
    ),
    (
        "e150d",
        RiskEntry {
            name: "Caramel IV",
            tier: RiskTier::High,
            description: "Contains 4-MEI (Carcinogen).",
        },
    ),
    (
        "e924",
        RiskEntry {
            name: "Potassium Bromate",
            tier: RiskTier::Critical,
            description: "Banned in EU/Canada; Kidney damage & Cancer.",
        },
    ),
    (
        "e950",
        RiskEntry {
            name: "Acesulfame K",
            tier: RiskTier::Moderate,
            description: "Contains Methylene Chloride (carcinogen) residues.",
        },
    ),
];

static GLOBAL_CATALOG: LazyLock<RiskCatalog> = LazyLock::new(RiskCatalog::build);

/// 위험 첨가물 카탈로그
///
/// # 인덱싱
///
/// O(1) 조회를 위해 코드 문자열로 인덱싱된 HashMap을 사용합니다.
/// 반환되는 [`RiskEntry`] 참조는 정적 테이블을 가리키므로 `'static`입니다.
#[derive(Debug)]
pub struct RiskCatalog {
    /// 코드 → 테이블 위치
    index: HashMap<&'static str, usize>,
}

impl RiskCatalog {
    /// 프로세스 전역 카탈로그를 반환합니다.
    pub fn global() -> &'static RiskCatalog {
        &GLOBAL_CATALOG
    }

    fn build() -> Self {
        let index = CATALOG_TABLE
            .iter()
            .enumerate()
            .map(|(idx, (code, _))| (*code, idx))
            .collect();
        Self { index }
    }

    /// 코드로 위험 정보를 조회합니다.
    ///
    /// 카탈로그에 없는 코드는 `None`을 반환하며, 이는 에러가 아닙니다.
    pub fn lookup(&self, code: &AdditiveCode) -> Option<&'static RiskEntry> {
        self.index
            .get(code.as_str())
            .and_then(|&idx| CATALOG_TABLE.get(idx))
            .map(|(_, entry)| entry)
    }

    /// 코드가 카탈로그에 있는지 확인합니다.
    pub fn contains(&self, code: &AdditiveCode) -> bool {
        self.index.contains_key(code.as_str())
    }

    /// 전체 항목을 정규 순서로 반환합니다.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static RiskEntry)> {
        CATALOG_TABLE.iter().map(|(code, entry)| (*code, entry))
    }

    /// 항목 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// 카탈로그가 비어 있는지 반환합니다.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
