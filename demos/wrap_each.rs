//! Wrap every child of a block in grid markup without restructuring it.
//!
//! Run with: `cargo run --example wrap_each`

use mxoxide::render::{render_to_string, text, Node, RenderOptions};
use mxoxide::{class, textf};

/// A plain list of paragraphs; knows nothing about the grid around it.
fn paragraphs(n: &mut Node<'_>, count: usize) {
    for i in 1..=count {
        n.p(None, textf!("Paragraph {i}"));
    }
}

fn main() {
    let grid = class(["grid"]);
    let cell = class(["grid-item"]);

    let html = render_to_string(&RenderOptions::default().pretty(true), |n| {
        n.div(Some(&grid), |n| {
            n.wrap_each(|n, content| n.div(Some(&cell), content), |n| paragraphs(n, 3));
        });
        n.footer(None, text("Not wrapped"));
    });
    print!("{html}");
}
