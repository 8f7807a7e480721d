#![no_main]

use libfuzzer_sys::fuzz_target;

// Full pipeline: parse, detect, render. Every input ends in a document.
fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let parsed = cf_parser::parse(input);
        let doc = cf_render_md::render_document(&parsed.graph);
        assert!(!doc.markdown.is_empty());
    }
});
