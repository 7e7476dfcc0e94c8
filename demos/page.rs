//! Render a small page to stdout, compact and pretty-printed.
//!
//! Run with: `cargo run --example page`
#![allow(clippy::expect_used)]

use std::io::{self, BufWriter};

use mxoxide::render::{render, text, Node, RenderOptions, Renderer};
use mxoxide::{class, register_void_attrs, textf, Attr};

struct Product {
    name: &'static str,
    price_cents: u32,
    in_stock: bool,
}

fn product_card(n: &mut Node<'_>, product: &Product) {
    let card = Attr::conditional([("class", [("card", true), ("sold-out", !product.in_stock)])]);
    n.article(Some(&card), |n| {
        n.h2(None, text(product.name));
        n.p(Some(&class(["price"])), textf!("${}.{:02}", product.price_cents / 100, product.price_cents % 100));
        let button = Attr::combine([
            Some(Attr::literal(r#"type="submit""#)),
            Some(Attr::conditional([("disabled", [("", !product.in_stock)])])),
        ]);
        n.button(Some(&button), text("Add to cart"));
        let notice = Attr::conditional([("hidden", [("", product.in_stock)])]);
        n.span(Some(&notice), text("Back soon"));
    });
}

fn page(n: &mut Node<'_>, products: &[Product]) {
    n.doctype();
    n.html(Some(&Attr::map([("lang", "en")])), |n| {
        n.head(None, |n| {
            n.meta(Some(&Attr::map([("charset", "utf-8")])));
            n.title(None, text("Shop & Co"));
        });
        n.body(None, |n| {
            n.main(Some(&class(["container"])), |n| {
                for product in products {
                    product_card(n, product);
                }
            });
            n.script(Some(&Attr::map([("src", "/app.js"), ("defer", "")])), |_| {});
        });
    });
}

fn main() {
    register_void_attrs(["hidden"]);

    let products = [
        Product {
            name: "Teapot <large>",
            price_cents: 2450,
            in_stock: true,
        },
        Product {
            name: "Kettle",
            price_cents: 3999,
            in_stock: false,
        },
    ];

    println!("=== Compact ===");
    let stdout = BufWriter::new(io::stdout().lock());
    render(stdout, &RenderOptions::default(), |n| page(n, &products)).expect("render failed");

    println!("\n\n=== Pretty ===");
    let mut renderer = Renderer::with_options(Vec::new(), RenderOptions::default().pretty(true));
    renderer.render(|n| page(n, &products));
    let html = renderer.finish().expect("render failed");
    print!("{}", String::from_utf8_lossy(&html));
}
