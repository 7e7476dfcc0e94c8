//! Attribute values.
//!
//! An [`Attr`] is everything that goes between the tag name and the closing
//! `>` of an opening tag. Four representations share one operation,
//! [`Attr::serialize`]:
//!
//! - [`Attr::Literal`]: pre-formatted text, written verbatim
//! - [`Attr::Map`]: name → value pairs, values escaped
//! - [`Attr::Conditional`]: name → (candidate value → flag), for class lists
//!   and toggled boolean attributes
//! - [`Attr::Combination`]: an ordered list of the above, with gaps
//!
//! Serialized attributes are separated by exactly one space, with no leading
//! or trailing whitespace, whatever the mix of variants.
//!
//! # Examples
//!
//! ```
//! use mxoxide::attr::{class, Attr};
//!
//! let attr = Attr::combine([
//!     Some(Attr::literal(r#"type="text""#)),
//!     None,
//!     Some(class(["input", "wide"])),
//! ]);
//! assert_eq!(attr.serialize(), r#"type="text" class="input wide""#);
//! ```

pub mod registry;

use std::fmt;

use indexmap::IndexMap;

use crate::util::escape::write_escaped;

pub use registry::{is_void_attr, register_void_attrs, BUILTIN_VOID_ATTRS};

/// An attribute value for an opening tag.
///
/// Map and conditional entries serialize in insertion order. Entries with
/// an empty name are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    /// Pre-formatted attribute text, inserted as-is. The caller is
    /// responsible for quoting and escaping.
    Literal(String),
    /// Attribute name → value. Values are escaped. A void attribute with an
    /// empty value is written bare.
    Map(IndexMap<String, String>),
    /// Attribute name → candidate value → flag.
    ///
    /// For a void attribute the name is written bare when any flag is set,
    /// and omitted otherwise. For any other name the attribute is always
    /// written, with the space-joined candidates whose flag is set
    /// (possibly `name=""`).
    Conditional(IndexMap<String, IndexMap<String, bool>>),
    /// Several attribute values written in order. `None` members are skipped.
    Combination(Vec<Option<Attr>>),
}

impl Attr {
    /// Creates a [`Attr::Literal`] from pre-formatted attribute text.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Creates a [`Attr::Map`] from name/value pairs.
    ///
    /// ```
    /// use mxoxide::attr::Attr;
    ///
    /// let attr = Attr::map([("href", "/?a=1&b=2")]);
    /// assert_eq!(attr.serialize(), r#"href="/?a=1&amp;b=2""#);
    /// ```
    #[must_use]
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Creates a [`Attr::Conditional`] from names and their flagged candidates.
    ///
    /// ```
    /// use mxoxide::attr::Attr;
    ///
    /// let selected = true;
    /// let attr = Attr::conditional([
    ///     ("class", vec![("tab", true), ("tab-active", selected)]),
    ///     ("disabled", vec![("", !selected)]),
    /// ]);
    /// assert_eq!(attr.serialize(), r#"class="tab tab-active""#);
    /// ```
    #[must_use]
    pub fn conditional<I, K, C, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: IntoIterator<Item = (V, bool)>,
        V: Into<String>,
    {
        Self::Conditional(
            entries
                .into_iter()
                .map(|(name, candidates)| {
                    let candidates = candidates
                        .into_iter()
                        .map(|(value, on)| (value.into(), on))
                        .collect();
                    (name.into(), candidates)
                })
                .collect(),
        )
    }

    /// Creates a [`Attr::Combination`]. Members may be `Attr` or `Option<Attr>`.
    #[must_use]
    pub fn combine<I>(members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<Attr>>,
    {
        Self::Combination(members.into_iter().map(Into::into).collect())
    }

    /// Serializes the value to attribute text, e.g. `id="main" hidden`.
    ///
    /// Returns an empty string when nothing is to be written.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out, 0);
        out
    }

    /// Appends this value to `out`. `start` marks where the current
    /// attribute list began, so separators are only written between entries.
    fn write_into(&self, out: &mut String, start: usize) {
        match self {
            Self::Literal(text) => {
                if !text.is_empty() {
                    separate(out, start);
                    out.push_str(text);
                }
            }
            Self::Map(entries) => {
                for (name, value) in entries {
                    if name.is_empty() {
                        continue;
                    }
                    separate(out, start);
                    out.push_str(name);
                    if !value.is_empty() || !is_void_attr(name) {
                        push_quoted(out, std::iter::once(value.as_str()));
                    }
                }
            }
            Self::Conditional(entries) => {
                for (name, candidates) in entries {
                    if name.is_empty() {
                        continue;
                    }
                    let mut enabled = candidates
                        .iter()
                        .filter(|(_, on)| **on)
                        .map(|(value, _)| value.as_str())
                        .peekable();
                    if is_void_attr(name) {
                        if enabled.peek().is_some() {
                            separate(out, start);
                            out.push_str(name);
                        }
                        continue;
                    }
                    separate(out, start);
                    out.push_str(name);
                    push_quoted(out, enabled);
                }
            }
            Self::Combination(members) => {
                for member in members.iter().flatten() {
                    member.write_into(out, start);
                }
            }
        }
    }
}

/// Writes the single space between two attributes.
fn separate(out: &mut String, start: usize) {
    if out.len() > start {
        out.push(' ');
    }
}

/// Writes `="v1 v2 ..."`, escaping each value.
fn push_quoted<'v>(out: &mut String, values: impl Iterator<Item = &'v str>) {
    out.push_str("=\"");
    for (i, value) in values.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_escaped(out, value);
    }
    out.push('"');
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<&str> for Attr {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for Attr {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

/// Creates a `class` attribute from a list of class names.
///
/// The names are joined with single spaces; the joined value is escaped
/// like any other map value.
///
/// ```
/// use mxoxide::attr::class;
///
/// assert_eq!(class(["container", "responsive", "red"]).serialize(), r#"class="container responsive red""#);
/// ```
#[must_use]
pub fn class<I, S>(names: I) -> Attr
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut value = String::new();
    for (i, name) in names.into_iter().enumerate() {
        if i > 0 {
            value.push(' ');
        }
        value.push_str(name.as_ref());
    }
    Attr::map([("class", value)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none() -> Vec<(&'static str, bool)> {
        Vec::new()
    }

    // -- Literal -------------------------------------------------------------

    #[test]
    fn test_literal_verbatim() {
        let attr = Attr::literal(r#"type="text" class="input""#);
        assert_eq!(attr.serialize(), r#"type="text" class="input""#);
        assert_eq!(Attr::from("x=<raw>").serialize(), "x=<raw>");
    }

    // -- Map -----------------------------------------------------------------

    #[test]
    fn test_map_empty_and_blank_name() {
        assert_eq!(Attr::map(Vec::<(String, String)>::new()).serialize(), "");
        assert_eq!(Attr::map([("", "grid")]).serialize(), "");
        assert_eq!(
            Attr::map([("", "grid"), ("id", "a")]).serialize(),
            r#"id="a""#
        );
    }

    #[test]
    fn test_map_escapes_value() {
        assert_eq!(Attr::map([("class", "grid")]).serialize(), r#"class="grid""#);
        assert_eq!(
            Attr::map([("title", r#"<"Tom" & 'Jerry'>"#)]).serialize(),
            r#"title="&lt;&#34;Tom&#34; &amp; &#39;Jerry&#39;&gt;""#
        );
    }

    #[test]
    fn test_map_void_attr() {
        assert_eq!(Attr::map([("disabled", "")]).serialize(), "disabled");
        assert_eq!(
            Attr::map([("open", "yes")]).serialize(),
            r#"open="yes""#
        );
        assert_eq!(Attr::map([("title", "")]).serialize(), r#"title="""#);
    }

    #[test]
    fn test_map_two_names_any_order() {
        let out = Attr::map([("class", "input"), ("type", "text")]).serialize();
        assert!(
            out == r#"class="input" type="text""# || out == r#"type="text" class="input""#,
            "unexpected serialization: {out}"
        );
    }

    // -- Conditional ---------------------------------------------------------

    #[test]
    fn test_conditional_empty() {
        assert_eq!(Attr::conditional(Vec::<(&str, Vec<(&str, bool)>)>::new()).serialize(), "");
        assert_eq!(Attr::conditional([("", none())]).serialize(), "");
    }

    #[test]
    fn test_conditional_normal_name_always_written() {
        assert_eq!(
            Attr::conditional([("placeholder", vec![("Hello, world!", false)])]).serialize(),
            r#"placeholder="""#
        );
        assert_eq!(
            Attr::conditional([("placeholder", vec![("Hello, world!", true)])]).serialize(),
            r#"placeholder="Hello, world!""#
        );
        assert_eq!(Attr::conditional([("class", none())]).serialize(), r#"class="""#);
    }

    #[test]
    fn test_conditional_joins_enabled_candidates() {
        let out = Attr::conditional([("class", vec![("a", true), ("b", false), ("c&d", true)])])
            .serialize();
        assert!(
            out == r#"class="a c&amp;d""# || out == r#"class="c&amp;d a""#,
            "unexpected serialization: {out}"
        );
    }

    #[test]
    fn test_conditional_void_name() {
        assert_eq!(
            Attr::conditional([("disabled", vec![("", false), ("x", false)])]).serialize(),
            ""
        );
        assert_eq!(
            Attr::conditional([("disabled", vec![("ignored", false), ("also", true)])]).serialize(),
            "disabled"
        );
    }

    #[test]
    fn test_conditional_no_stray_space_for_dropped_void() {
        let out = Attr::conditional([
            ("disabled", vec![("", false)]),
            ("type", vec![("text", true)]),
            ("defer", vec![("", false)]),
        ])
        .serialize();
        assert_eq!(out, r#"type="text""#);
    }

    #[test]
    fn test_conditional_mixed_any_order() {
        let out = Attr::conditional([("type", vec![("text", true)]), ("disabled", vec![("", true)])])
            .serialize();
        assert!(
            out == r#"type="text" disabled"# || out == r#"disabled type="text""#,
            "unexpected serialization: {out}"
        );
    }

    // -- Combination ---------------------------------------------------------

    #[test]
    fn test_combination_skips_none() {
        let attr = Attr::combine([
            Some(Attr::literal(r#"a="1""#)),
            None,
            Some(Attr::map([("b", "2")])),
        ]);
        assert_eq!(attr.serialize(), r#"a="1" b="2""#);
    }

    #[test]
    fn test_combination_with_conditional() {
        let attr = Attr::combine([
            Attr::literal(r#"class="input" type="number""#),
            Attr::conditional([("placeholder", vec![("Hello, world!", false)])]),
        ]);
        assert_eq!(
            attr.serialize(),
            r#"class="input" type="number" placeholder="""#
        );
    }

    #[test]
    fn test_combination_skips_empty_members() {
        let attr = Attr::combine([
            None,
            Some(Attr::literal("")),
            Some(Attr::map([("", "x")])),
            Some(Attr::literal("a")),
            Some(Attr::conditional([("disabled", vec![("", false)])])),
            Some(Attr::literal("b")),
            None,
        ]);
        assert_eq!(attr.serialize(), "a b");
    }

    #[test]
    fn test_combination_nested_and_empty() {
        let inner = Attr::combine([Attr::literal("x"), Attr::literal("y")]);
        let attr = Attr::combine([Some(inner), None, Some(Attr::literal("z"))]);
        assert_eq!(attr.serialize(), "x y z");
        assert_eq!(Attr::combine(Vec::<Option<Attr>>::new()).serialize(), "");
        assert_eq!(Attr::combine([None::<Attr>, None]).serialize(), "");
    }

    // -- class / Display -----------------------------------------------------

    #[test]
    fn test_class() {
        assert_eq!(class(["x", "y", "z"]).serialize(), r#"class="x y z""#);
        assert_eq!(class(["a<b"]).serialize(), r#"class="a&lt;b""#);
        assert_eq!(class(Vec::<String>::new()).serialize(), r#"class="""#);
    }

    #[test]
    fn test_display_matches_serialize() {
        let attr = class(["card"]);
        assert_eq!(format!("<div {attr}>"), r#"<div class="card">"#);
    }

    #[test]
    fn test_registered_void_attr_in_map() {
        register_void_attrs(["attr-mod-flag"]);
        assert_eq!(Attr::map([("attr-mod-flag", "")]).serialize(), "attr-mod-flag");
        assert_eq!(
            Attr::conditional([("attr-mod-flag", vec![("on", true)])]).serialize(),
            "attr-mod-flag"
        );
    }
}
