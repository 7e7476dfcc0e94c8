//! Process-wide registry of void (boolean-style) attribute names.
//!
//! A void attribute is written bare when it carries no value, e.g.
//! `<button disabled>`. The registry starts with `disabled`, `defer` and
//! `open` and grows through [`register_void_attrs`]. Names are never removed.
//!
//! The set lives behind a `parking_lot::RwLock`, so registration from
//! several threads is safe. Lookups take the read lock on every call;
//! register application-wide names once at startup rather than mid-render.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Void attributes known without registration.
pub const BUILTIN_VOID_ATTRS: [&str; 3] = ["disabled", "defer", "open"];

static CUSTOM_VOID_ATTRS: Lazy<RwLock<HashSet<String>>> = Lazy::new(|| RwLock::new(HashSet::new()));

/// Registers attribute names that should be treated as void.
///
/// Registering a name twice, or registering a built-in, is a no-op.
///
/// # Examples
///
/// ```
/// use mxoxide::attr::{is_void_attr, register_void_attrs};
///
/// register_void_attrs(["hidden", "required"]);
/// assert!(is_void_attr("hidden"));
/// assert!(is_void_attr("disabled"));
/// ```
pub fn register_void_attrs<I, S>(names: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut set = CUSTOM_VOID_ATTRS.write();
    for name in names {
        let name = name.into();
        if BUILTIN_VOID_ATTRS.contains(&name.as_str()) {
            continue;
        }
        log::trace!("registering void attribute {name:?}");
        set.insert(name);
    }
}

/// Returns true if `name` is a built-in or registered void attribute.
#[must_use]
pub fn is_void_attr(name: &str) -> bool {
    BUILTIN_VOID_ATTRS.contains(&name) || CUSTOM_VOID_ATTRS.read().contains(name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_void() {
        for name in BUILTIN_VOID_ATTRS {
            assert!(is_void_attr(name), "{name} should be void");
        }
    }

    #[test]
    fn test_registration_is_idempotent() {
        register_void_attrs(["registry-it-is", "registry-it-also-is"]);
        register_void_attrs(["registry-it-is"]);
        register_void_attrs(["disabled"]);
        assert!(is_void_attr("registry-it-is"));
        assert!(is_void_attr("registry-it-also-is"));
        assert!(!is_void_attr("registry-it-isn't"));
        assert!(!CUSTOM_VOID_ATTRS.read().contains("disabled"));
    }

    #[test]
    fn test_empty_and_case_sensitive() {
        assert!(!is_void_attr(""));
        assert!(!is_void_attr("Disabled"));
    }

    #[test]
    fn test_concurrent_registration() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || register_void_attrs([format!("registry-thread-{i}")])))
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        for i in 0..4 {
            assert!(is_void_attr(&format!("registry-thread-{i}")));
        }
    }
}
