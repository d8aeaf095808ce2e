// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_document(sections: usize) -> String {
    let mut content = String::from("---\nSCOPE: bench_notes\ntitle: Benchmark\ncount: 7\n---\n\n");
    for section in 0..sections {
        content.push_str(&format!(
            "Paragraph {section} with **bold**, *italic* and a [link](https://example.com/{section}).\n"
        ));
        content.push_str("Second line with __strong__ and _soft_ text.\n\n");
        if section % 5 == 0 {
            content.push_str(&format!(
                "Preamble {section}\n---\nQUILL: block_{section}\nflag: true\nratio: 0.5 # tuned\n---\n\n"
            ));
        }
        if section % 7 == 0 {
            content.push_str("Before rule\n\n---\n\nAfter rule\n\n");
        }
    }
    content
}

/// A viewport of roughly `bytes` starting at the middle of the document.
#[allow(dead_code)]
pub fn middle_viewport(len: usize, bytes: usize) -> (usize, usize) {
    let start = (len / 2).saturating_sub(bytes / 2);
    (start, (start + bytes).min(len))
}
