//! HTML-to-Rust component generator.
//!
//! Turns a piece of existing markup into the source of a component function
//! that reproduces it through the tag methods of [`crate::render::Node`]:
//!
//! - elements become catalog calls (`n.div(..)`), void elements the
//!   attribute-only form (`n.br(..)`), unknown names `n.element_with("x", ..)`
//! - attributes become one `Attr::map([...])` with entries sorted by name;
//!   namespaced names keep their prefix (`xlink:href`)
//! - `<template>` contents are emitted as the template's children
//! - text is trimmed, blank text is dropped, the rest becomes `n.text("..")`
//!   (`n.raw("..")` inside `<script>` and `<style>`)
//! - comments are dropped
//!
//! Parsing uses `scraper`, so the input gets full HTML5 error recovery. In
//! document mode the parser supplies missing `<html>`, `<head>` and `<body>`
//! elements; fragment mode renders only the given nodes.
//!
//! # Examples
//!
//! ```
//! use mxoxide::codegen::{generate, GenerateOptions};
//!
//! let src = generate(r#"<p class="lead">Hi</p>"#, "Intro", &GenerateOptions::default().fragment(true)).unwrap();
//! assert_eq!(
//!     src,
//!     "pub fn intro(n: &mut mxoxide::Node<'_>) {\n    n.p(Some(&mxoxide::Attr::map([(\"class\", \"lead\")])), |n| {\n        n.text(\"Hi\");\n    });\n}\n"
//! );
//! ```

use std::fmt::{self, Write as _};
use std::ops::Deref;

use scraper::{ElementRef, Html, Node};

use crate::error::GenerateError;
use crate::tags;

/// Options controlling code generation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Parse the input as a body fragment instead of a whole document.
    /// Defaults to `false`.
    pub fragment: bool,
    /// The path generated code uses to reach this crate's items.
    /// Defaults to `mxoxide`.
    pub crate_path: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            fragment: false,
            crate_path: "mxoxide".to_string(),
        }
    }
}

impl GenerateOptions {
    /// Enables or disables fragment parsing.
    #[must_use]
    pub fn fragment(mut self, yes: bool) -> Self {
        self.fragment = yes;
        self
    }

    /// Sets the path used for `Node` and `Attr` in generated code, e.g.
    /// `crate` when the output lands inside this crate.
    #[must_use]
    pub fn crate_path(mut self, path: &str) -> Self {
        self.crate_path = path.to_string();
        self
    }
}

/// Generates the source of a component function reproducing `html`.
///
/// `name` becomes the function name in snake case (`UserCard` →
/// `user_card`).
///
/// # Errors
///
/// Returns [`GenerateError::InvalidName`] if `name` cannot be turned into a
/// Rust identifier. Malformed markup is never an error; the parser recovers.
pub fn generate(html: &str, name: &str, options: &GenerateOptions) -> Result<String, GenerateError> {
    let fn_name = component_fn_name(name)?;
    let doc = if options.fragment {
        Html::parse_fragment(html)
    } else {
        Html::parse_document(html)
    };
    for err in &doc.errors {
        log::debug!("recovered from markup error: {err}");
    }

    let krate = options.crate_path.as_str();
    let mut emitter = Generator {
        out: String::new(),
        krate,
    };
    emitter.line(0, format_args!("pub fn {fn_name}(n: &mut {krate}::Node<'_>) {{"));
    let root = doc.root_element();
    if options.fragment {
        emitter.children(root, 1);
    } else {
        let has_doctype = doc
            .tree
            .root()
            .children()
            .any(|child| matches!(child.value(), Node::Doctype(_)));
        if has_doctype {
            emitter.line(1, format_args!("n.doctype();"));
        }
        emitter.element(root, 1);
    }
    emitter.line(0, format_args!("}}"));
    Ok(emitter.out)
}

/// A node of the parsed tree (`ego_tree::NodeRef<'a, Node>`).
type TreeNode<'a> = <ElementRef<'a> as Deref>::Target;

/// Accumulates generated source.
struct Generator<'o> {
    out: String,
    krate: &'o str,
}

impl Generator<'_> {
    fn line(&mut self, depth: usize, args: fmt::Arguments<'_>) {
        for _ in 0..depth {
            self.out.push_str("    ");
        }
        let _ = self.out.write_fmt(args);
        self.out.push('\n');
    }

    fn element(&mut self, el: ElementRef<'_>, depth: usize) {
        let name = el.value().name();
        let attr = self.attr_expr(el);
        let call = match tags::lookup(name) {
            Some(tag) if tag.void => {
                self.line(depth, format_args!("n.{name}({attr});"));
                return;
            }
            Some(_) => format!("n.{name}({attr}, "),
            None => format!("n.element_with({name:?}, {attr}, "),
        };
        if has_content(*el) {
            self.line(depth, format_args!("{call}|n| {{"));
            self.children(el, depth + 1);
            self.line(depth, format_args!("}});"));
        } else {
            self.line(depth, format_args!("{call}|_| {{}});"));
        }
    }

    fn children(&mut self, parent: ElementRef<'_>, depth: usize) {
        let raw_text = is_raw_text_element(parent.value().name());
        self.nodes(*parent, raw_text, depth);
    }

    fn nodes(&mut self, parent: TreeNode<'_>, raw_text: bool, depth: usize) {
        for child in parent.children() {
            match child.value() {
                Node::Element(_) => {
                    if let Some(el) = ElementRef::wrap(child) {
                        self.element(el, depth);
                    }
                }
                Node::Text(text) => {
                    let text = text.trim();
                    if text.is_empty() {
                        continue;
                    }
                    let method = if raw_text { "raw" } else { "text" };
                    self.line(depth, format_args!("n.{method}({text:?});"));
                }
                // <template> contents hang off the element as a fragment.
                Node::Fragment => self.nodes(child, raw_text, depth),
                _ => {}
            }
        }
    }

    /// Builds the attribute argument: `None` or `Some(&Attr::map([...]))`.
    ///
    /// Names keep their namespace prefix (`xlink:href`).
    fn attr_expr(&self, el: ElementRef<'_>) -> String {
        let mut attrs: Vec<(String, &str)> = el
            .value()
            .attrs
            .iter()
            .filter(|(name, _)| !name.local.is_empty())
            .map(|(name, value)| {
                let key = match &name.prefix {
                    Some(prefix) => format!("{prefix}:{}", name.local),
                    None => name.local.to_string(),
                };
                (key, &**value)
            })
            .collect();
        if attrs.is_empty() {
            return "None".to_string();
        }
        attrs.sort_unstable();
        let mut expr = format!("Some(&{}::Attr::map([", self.krate);
        for (i, (name, value)) in attrs.iter().enumerate() {
            if i > 0 {
                expr.push_str(", ");
            }
            let _ = write!(expr, "({name:?}, {value:?})");
        }
        expr.push_str("]))");
        expr
    }
}

/// Returns true if `node` has anything the generator would emit inside it.
fn has_content(node: TreeNode<'_>) -> bool {
    node.children().any(|child| match child.value() {
        Node::Element(_) => true,
        Node::Text(text) => !text.trim().is_empty(),
        Node::Fragment => has_content(child),
        _ => false,
    })
}

/// Returns true for elements whose text content must not be escaped.
fn is_raw_text_element(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Converts a component name to a snake_case function name.
///
/// `-` becomes `_` and a lowercase-to-uppercase step starts a new word.
fn component_fn_name(name: &str) -> Result<String, GenerateError> {
    let invalid = || GenerateError::InvalidName(name.to_string());
    let mut out = String::with_capacity(name.len() + 4);
    let mut after_lower = false;
    for ch in name.chars() {
        match ch {
            '-' | '_' => {
                out.push('_');
                after_lower = false;
            }
            c if c.is_ascii_uppercase() => {
                if after_lower {
                    out.push('_');
                }
                out.push(c.to_ascii_lowercase());
                after_lower = false;
            }
            c if c.is_ascii_lowercase() || c.is_ascii_digit() => {
                out.push(c);
                after_lower = true;
            }
            _ => return Err(invalid()),
        }
    }
    let starts_ok = out.starts_with(|c: char| c == '_' || c.is_ascii_lowercase());
    if !starts_ok || out == "_" || RUST_KEYWORDS.contains(&out.as_str()) {
        return Err(invalid());
    }
    Ok(out)
}
