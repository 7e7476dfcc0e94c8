#![no_main]
use libfuzzer_sys::fuzz_target;
use mxoxide::render::{render_to_string, RenderOptions};
use mxoxide::Attr;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let attr = Attr::map([("title", s)]);
        let html = render_to_string(&RenderOptions::default(), |n| {
            n.p(Some(&attr), |n| n.text(s));
        });
        // Escaped output never carries markup from the input
        let body = &html[html.find('>').map_or(0, |i| i + 1)..];
        assert!(!body.trim_end_matches("</p>").contains('<'));
    }
});
