//! HTML entity escaping.
//!
//! Every text- and attribute-emitting path in the crate goes through this
//! module. Five characters are replaced:
//!
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&#34;`
//! - `'` → `&#39;`
//!
//! The numeric forms for the quotes are shorter than `&quot;` and are valid
//! in both text content and attribute values, so one escaper serves both.

use std::borrow::Cow;

/// Returns the replacement entity for `ch`, if it needs escaping.
#[inline]
fn entity(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&#34;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escapes `text` for safe inclusion in HTML text or a quoted attribute value.
///
/// Borrows the input unchanged when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use mxoxide::util::escape::escape;
///
/// assert_eq!(escape("a < b"), "a &lt; b");
/// assert_eq!(escape(r#"say "hi""#), "say &#34;hi&#34;");
/// assert_eq!(escape("plain"), "plain");
/// ```
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(['&', '<', '>', '"', '\'']) else {
        return Cow::Borrowed(text);
    };
    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    write_escaped(&mut out, &text[first..]);
    Cow::Owned(out)
}

/// Appends the escaped form of `text` to `out`.
pub fn write_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match entity(ch) {
            Some(ent) => out.push_str(ent),
            None => out.push(ch),
        }
    }
}
