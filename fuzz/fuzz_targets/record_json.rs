#![no_main]

use libfuzzer_sys::fuzz_target;
use bioscan_report::{RawProductRecord, assemble};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    // 디코딩에 성공한 레코드는 항상 리포트로 조립되어야 함
    if let Ok(raw) = RawProductRecord::from_json(content) {
        let report = assemble(&raw);
        assert!(report.nutrients.salt() >= 0.0);
        assert!(report.derived.starch >= 0.0);
        assert!(report.derived.unsaturated_fat >= 0.0);
    }

    if let Ok(Some(raw)) = RawProductRecord::from_envelope_or_product(content) {
        let _ = assemble(&raw);
    }
});
