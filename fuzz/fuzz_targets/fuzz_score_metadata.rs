#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz metadata decoding and scoring.
///
/// Any UTF-8 text must decode to a document or a malformed state, and
/// scoring must stay within 0..=100.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let input = ip_kpis::parse_metadata_str(s);
        let report = ip_kpis::QualityScorer::new().score(&input);
        assert!((0.0..=100.0 + 1e-9).contains(&report.overall_score));
    }
});
