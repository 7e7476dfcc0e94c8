//! The HTML tag catalog.
//!
//! One macro invocation below is the single list of tag names. It produces
//! the [`TAGS`] table, the void-tag check used by the element writer, and a
//! method on [`Node`] per tag:
//!
//! - normal tags take an attribute and one child callback:
//!   `n.div(attr, |n| ...)`
//! - void tags take only an attribute: `n.br(None)`
//!
//! Tags missing from the catalog (custom elements, SVG children) go through
//! [`Node::element`] directly.
//!
//! A tag method takes one closure rather than a list of child callbacks; the
//! closure runs its children in order. Prebuilt callbacks, including `None`
//! entries to skip, can still be passed as a list through [`Node::element`]
//! with the catalog name:
//!
//! ```
//! use mxoxide::render::{render_to_string, text, Child, RenderOptions};
//!
//! let title = text("Title");
//! let body = text("Body");
//! let children: [Child<'_>; 3] = [Some(&title), None, Some(&body)];
//! let html = render_to_string(&RenderOptions::default(), |n| {
//!     n.element("section", None, &children);
//! });
//! assert_eq!(html, "<section>TitleBody</section>");
//! ```

use crate::attr::Attr;
use crate::render::Node;

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    /// The lowercase tag name, which is also the `Node` method name.
    pub name: &'static str,
    /// Whether the tag is an HTML void element (no children, no end tag).
    pub void: bool,
}

macro_rules! tag_catalog {
    (
        normal: [$($normal:ident),* $(,)?],
        void: [$($void:ident),* $(,)?] $(,)?
    ) => {
        /// Every tag with a dedicated `Node` method, void tags last.
        pub static TAGS: &[Tag] = &[
            $(Tag { name: stringify!($normal), void: false },)*
            $(Tag { name: stringify!($void), void: true },)*
        ];

        /// The HTML void elements.
        pub static VOID_TAGS: &[&str] = &[$(stringify!($void)),*];

        impl Node<'_> {
            $(
                #[doc = concat!("Writes a `<", stringify!($normal), ">` element.")]
                pub fn $normal<F>(&mut self, attr: Option<&Attr>, children: F)
                where
                    F: Fn(&mut Node<'_>),
                {
                    self.element_with(stringify!($normal), attr, children);
                }
            )*
            $(
                #[doc = concat!("Writes a void `<", stringify!($void), " />` element.")]
                pub fn $void(&mut self, attr: Option<&Attr>) {
                    self.element(stringify!($void), attr, &[]);
                }
            )*
        }
    };
}

tag_catalog! {
    normal: [
        a, abbr, address, article, aside, audio, b, bdi, bdo, blockquote, body,
        button, canvas, caption, cite, code, colgroup, data, datalist, dd, del,
        details, dfn, dialog, div, dl, dt, em, fieldset, figcaption, figure,
        footer, form, h1, h2, h3, h4, h5, h6, head, header, html, i, iframe, ins,
        kbd, label, legend, li, main, map, mark, meter, nav, noscript, object, ol,
        optgroup, option, output, p, picture, pre, progress, q, rp, rt, ruby, s,
        samp, script, section, select, slot, small, span, strong, style, sub,
        summary, sup, svg, table, tbody, td, template, textarea, tfoot, th, thead,
        time, title, tr, u, ul, var, video,
    ],
    void: [area, base, br, col, embed, hr, img, input, link, meta, source, track, wbr],
}

/// Returns true if `tag` is an HTML void element.
///
/// Matching is exact: tag names are expected in lowercase.
#[must_use]
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Looks up a catalog entry by tag name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Tag> {
    TAGS.iter().find(|tag| tag.name == name)
}

impl Node<'_> {
    /// Writes the HTML5 doctype, `<!DOCTYPE html>`.
    pub fn doctype(&mut self) {
        self.raw("<!DOCTYPE html>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_tags_are_html5_void_elements() {
        let mut void: Vec<_> = VOID_TAGS.to_vec();
        void.sort_unstable();
        assert_eq!(
            void,
            [
                "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
                "source", "track", "wbr"
            ]
        );
    }

    #[test]
    fn test_is_void_tag() {
        assert!(is_void_tag("br"));
        assert!(is_void_tag("input"));
        assert!(!is_void_tag("div"));
        assert!(!is_void_tag("BR"));
        assert!(!is_void_tag("param"));
    }

    #[test]
    fn test_table_agrees_with_void_check() {
        for tag in TAGS {
            assert_eq!(tag.void, is_void_tag(tag.name), "mismatch for {}", tag.name);
        }
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<_> = TAGS.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TAGS.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("svg").map(|t| t.void), Some(false));
        assert_eq!(lookup("wbr").map(|t| t.void), Some(true));
        assert!(lookup("blink").is_none());
    }
}
