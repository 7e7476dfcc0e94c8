//! # mxoxide
//!
//! Declarative, streaming HTML rendering. Components are plain Rust
//! functions that call element methods on a render context; each call writes
//! escaped HTML straight to an [`std::io::Write`] sink. There is no DOM and no
//! intermediate string buffer.
//!
//! ## Quick Start
//!
//! ```
//! use mxoxide::{class, render_to_string, text, Node, RenderOptions};
//!
//! fn greeting(n: &mut Node<'_>, name: &str) {
//!     n.main(Some(&class(["container"])), |n| {
//!         n.p(None, text(format!("Hello, {name}!")));
//!     });
//! }
//!
//! let html = render_to_string(&RenderOptions::default(), |n| greeting(n, "world"));
//! assert_eq!(html, r#"<main class="container"><p>Hello, world!</p></main>"#);
//! ```
//!
//! Write failures never abort a render: the first one is latched, later
//! writes are skipped, and the error is available from
//! [`render::Renderer::finish`] once the component returns.
//!
//! With the `codegen` feature, [`codegen::generate`] turns existing HTML into
//! component source code; the `mxgen` binary wraps it for the command line.

pub mod attr;
#[cfg(feature = "codegen")]
pub mod codegen;
pub mod error;
pub mod render;
pub mod tags;
pub mod util;

// Re-export primary types at the crate root for convenience.
pub use attr::{class, register_void_attrs, Attr};
pub use error::{GenerateError, RenderError};
pub use render::{raw, render, render_to_string, text, Child, Node, RenderOptions, Renderer};
