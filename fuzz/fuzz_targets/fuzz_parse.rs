#![no_main]

use libfuzzer_sys::fuzz_target;

// The tokenizer must be total: arbitrary input produces a graph plus
// diagnostics, never a panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let result = cf_parser::parse(input);
        let _ = (result.graph.node_count(), result.diagnostics.len());
    }
});
