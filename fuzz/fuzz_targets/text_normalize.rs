#![no_main]

use libfuzzer_sys::fuzz_target;
use bioscan_report::{allergen_list, normalize_ingredients_text};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let cleaned = normalize_ingredients_text(Some(text));
        assert!(!cleaned.is_empty());

        for allergen in allergen_list(text) {
            assert!(!allergen.is_empty());
            assert!(!allergen.contains(','));
        }
    }
});
