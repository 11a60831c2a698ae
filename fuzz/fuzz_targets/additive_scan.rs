#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use bioscan_core::types::RiskTier;
use bioscan_report::{AdditiveScanner, DuplicatePolicy};

/// 퍼저용 구조적 입력
#[derive(Arbitrary, Debug)]
struct FuzzInput {
    tags: Vec<String>,
    collapse: bool,
    /// 0..3 → 최소 등급
    min_tier: u8,
}

fuzz_target!(|input: FuzzInput| {
    let policy = if input.collapse {
        DuplicatePolicy::Collapse
    } else {
        DuplicatePolicy::Preserve
    };
    let min_tier = RiskTier::ALL[usize::from(input.min_tier) % RiskTier::ALL.len()];

    let risks = AdditiveScanner::new(policy, min_tier).scan(&input.tags);

    // 탐지 수는 입력 태그 수를 넘지 않고, 모두 최소 등급 이상
    assert!(risks.len() <= input.tags.len());
    assert!(risks.iter().all(|risk| risk.tier() >= min_tier));
});
