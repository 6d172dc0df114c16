#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz placeholder substitution with arbitrary templates.
fuzz_target!(|data: &[u8]| {
    if let Ok(template) = std::str::from_utf8(data) {
        let data = ip_kpis::PageData::default();
        let _ = ip_kpis::render_template(template, &data);
    }
});
