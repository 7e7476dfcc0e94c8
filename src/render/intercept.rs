//! Sibling interception: wrap each element of a block in extra markup.
//!
//! [`Node::wrap_each`] runs a body against a derived context. Every element
//! call made directly on that context is captured as a deferred write and
//! passed to a wrapper, which decides what to put around it:
//!
//! ```
//! use mxoxide::attr::class;
//! use mxoxide::render::{render_to_string, text, RenderOptions};
//!
//! let item = class(["grid-item"]);
//! let html = render_to_string(&RenderOptions::default(), |n| {
//!     n.wrap_each(
//!         |n, content| n.div(Some(&item), content),
//!         |n| {
//!             n.p(None, text("one"));
//!             n.p(None, text("two"));
//!         },
//!     );
//! });
//! assert_eq!(
//!     html,
//!     r#"<div class="grid-item"><p>one</p></div><div class="grid-item"><p>two</p></div>"#
//! );
//! ```
//!
//! Interception is one level deep. Elements written *inside* a captured call
//! run against the context the wrapper supplies, so they are never captured
//! again. The derived context shares the sink, error latch and indentation
//! of the context it came from.

use super::Node;

/// Wrapper signature: the context to write into, and the captured write.
pub(crate) type Wrapper<'w> = dyn Fn(&mut Node<'_>, &dyn Fn(&mut Node<'_>)) + 'w;

/// An installed interception hook.
pub(crate) struct Intercept<'a> {
    pub(crate) wrapper: &'a Wrapper<'a>,
    /// The hook of the context `wrap_each` was called on. The wrapper writes
    /// through that context, so nested `wrap_each` calls compose.
    pub(crate) outer: Option<&'a Intercept<'a>>,
}

impl Node<'_> {
    /// Runs `body` with every direct element call routed through `wrapper`.
    ///
    /// `wrapper` receives a context equivalent to `self` and the captured
    /// element write. It may write markup around the capture (typically by
    /// passing it as the child of another element), call it more than once,
    /// or drop it.
    ///
    /// Text and raw writes in `body` are not elements and are written
    /// directly.
    pub fn wrap_each<W, B>(&mut self, wrapper: W, body: B)
    where
        W: Fn(&mut Node<'_>, &dyn Fn(&mut Node<'_>)),
        B: FnOnce(&mut Node<'_>),
    {
        let intercept = Intercept {
            wrapper: &wrapper,
            outer: self.hook,
        };
        let mut proxy = Node {
            writer: &mut *self.writer,
            state: &mut *self.state,
            hook: Some(&intercept),
        };
        body(&mut proxy);
    }
}
