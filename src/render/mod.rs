//! Streaming HTML rendering.
//!
//! A [`Node`] is the render context handed to every component function. Each
//! element call writes its opening tag straight to the output, runs its
//! children against the same context, then writes the closing tag. Nothing is
//! buffered and no tree is built.
//!
//! Writes go through a latch: the first failed write is stored and every
//! write after it is skipped, while the component functions keep running to
//! completion. The stored error is read back with [`Node::err`],
//! [`Renderer::err`] or [`Renderer::finish`].
//!
//! # Examples
//!
//! ```
//! use mxoxide::render::{render_to_string, text, RenderOptions};
//! use mxoxide::attr::Attr;
//!
//! let html = render_to_string(&RenderOptions::default(), |n| {
//!     n.main(Some(&Attr::literal(r#"class="container""#)), |n| {
//!         n.p(None, text("Hello, world!"));
//!     });
//! });
//! assert_eq!(html, r#"<main class="container"><p>Hello, world!</p></main>"#);
//! ```

pub mod intercept;

use std::borrow::Cow;
use std::fmt;
use std::io::Write;

use crate::attr::Attr;
use crate::error::RenderError;
use crate::tags::is_void_tag;
use crate::util::escape::escape;

use intercept::Intercept;

/// A child callback: renders content into the context it is given.
///
/// `None` entries are skipped, so optional content can be passed in place.
pub type Child<'c> = Option<&'c dyn Fn(&mut Node<'_>)>;

/// Options controlling rendered output.
///
/// ```
/// use mxoxide::render::RenderOptions;
///
/// let opts = RenderOptions::default().pretty(true).indent_str("\t");
/// assert!(opts.pretty);
/// ```
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Put every tag on its own line, indented by nesting depth.
    /// Defaults to `false`.
    pub pretty: bool,
    /// The indentation written per nesting level when `pretty` is `true`.
    /// Defaults to two spaces.
    pub indent_str: String,
    /// Add a `data-node="<tag>"` marker to every opening tag, for finding
    /// elements in browser dev tools. Defaults to `false`.
    pub annotate: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent_str: "  ".to_string(),
            annotate: false,
        }
    }
}

impl RenderOptions {
    /// Enables or disables pretty-printed output.
    ///
    /// Each tag is written on its own line and element children are
    /// indented one level deeper than their parent. Text and raw content are
    /// written as-is, without added indentation.
    #[must_use]
    pub fn pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }

    /// Sets the indentation string used for each nesting level.
    #[must_use]
    pub fn indent_str(mut self, s: &str) -> Self {
        self.indent_str = s.to_string();
        self
    }

    /// Enables or disables `data-node` markers on opening tags.
    #[must_use]
    pub fn annotate(mut self, yes: bool) -> Self {
        self.annotate = yes;
        self
    }
}

/// Per-render state shared by a context and every context derived from it.
#[derive(Debug)]
pub(crate) struct State {
    error: Option<RenderError>,
    depth: usize,
    options: RenderOptions,
}

impl State {
    fn new(options: RenderOptions) -> Self {
        Self {
            error: None,
            depth: 0,
            options,
        }
    }
}

/// The render context.
///
/// Component functions take `&mut Node<'_>` and call element methods on it
/// (`n.div(..)`, `n.p(..)`, `n.text(..)`, see [`crate::tags`]). A `Node` is
/// obtained from a [`Renderer`] or one of the [`render`] helpers.
pub struct Node<'a> {
    writer: &'a mut dyn Write,
    state: &'a mut State,
    hook: Option<&'a Intercept<'a>>,
}

impl<'a> Node<'a> {
    /// Writes an element: opening tag, children, closing tag.
    ///
    /// `attr` is serialized into the opening tag when it produces any text.
    /// Void tags (`br`, `img`, ...) are written as `<tag />` and their
    /// children are never run.
    ///
    /// Inside a [`Node::wrap_each`] body the call is not written directly;
    /// it is handed to the wrapper as a deferred write.
    pub fn element(&mut self, tag: &str, attr: Option<&Attr>, children: &[Child<'_>]) {
        if let Some(intercept) = self.hook {
            let deferred: &dyn Fn(&mut Node<'_>) = &|n| n.element(tag, attr, children);
            let mut outer = Node {
                writer: &mut *self.writer,
                state: &mut *self.state,
                hook: intercept.outer,
            };
            (intercept.wrapper)(&mut outer, deferred);
            return;
        }

        let pretty = self.state.options.pretty;
        if pretty {
            self.write_indent();
        }

        self.write("<");
        self.write(tag);
        if let Some(attr) = attr {
            let attrs = attr.serialize();
            if !attrs.is_empty() {
                self.write(" ");
                self.write(&attrs);
            }
        }
        if self.state.options.annotate {
            self.write(" data-node=\"");
            self.write(&escape(tag));
            self.write("\"");
        }

        if is_void_tag(tag) {
            self.write(" />");
            if pretty {
                self.write("\n");
            }
            return;
        }

        self.write(">");
        if pretty {
            self.write("\n");
            self.state.depth += 1;
        }
        for child in children.iter().flatten() {
            child(self);
        }
        if pretty {
            self.state.depth -= 1;
            self.write_indent();
        }
        self.write("</");
        self.write(tag);
        self.write(">");
        if pretty {
            self.write("\n");
        }
    }

    /// Writes an element with a single child callback.
    ///
    /// This is the form the tag methods use, for tags that have none:
    ///
    /// ```
    /// use mxoxide::render::{render_to_string, text, RenderOptions};
    ///
    /// let html = render_to_string(&RenderOptions::default(), |n| {
    ///     n.element_with("my-card", None, text("hi"));
    /// });
    /// assert_eq!(html, "<my-card>hi</my-card>");
    /// ```
    pub fn element_with<F>(&mut self, tag: &str, attr: Option<&Attr>, children: F)
    where
        F: Fn(&mut Node<'_>),
    {
        let child: &dyn Fn(&mut Node<'_>) = &children;
        self.element(tag, attr, &[Some(child)]);
    }

    /// Writes escaped text.
    pub fn text(&mut self, text: &str) {
        self.write(&escape(text));
    }

    /// Formats, escapes and writes text.
    ///
    /// ```
    /// use mxoxide::render::{render_to_string, RenderOptions};
    ///
    /// let html = render_to_string(&RenderOptions::default(), |n| n.textf(format_args!("{} < {}", 1, 2)));
    /// assert_eq!(html, "1 &lt; 2");
    /// ```
    pub fn textf(&mut self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(s) => self.text(s),
            None => self.text(&args.to_string()),
        }
    }

    /// Writes `html` unescaped. The caller vouches for its contents.
    pub fn raw(&mut self, html: &str) {
        self.write(html);
    }

    /// Returns the first write error of this render pass, if any.
    #[must_use]
    pub fn err(&self) -> Option<&RenderError> {
        self.state.error.as_ref()
    }

    /// Returns the current nesting depth (only tracked in pretty mode).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.state.depth
    }

    /// Returns the options this render pass was started with.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.state.options
    }

    fn write(&mut self, s: &str) {
        latched_write(&mut *self.writer, &mut self.state.error, s);
    }

    fn write_indent(&mut self) {
        let State { error, depth, options } = &mut *self.state;
        for _ in 0..*depth {
            latched_write(&mut *self.writer, error, &options.indent_str);
        }
    }
}

/// Writes `s` unless an earlier write failed; stores the first failure.
fn latched_write(writer: &mut dyn Write, error: &mut Option<RenderError>, s: &str) {
    if error.is_some() || s.is_empty() {
        return;
    }
    if let Err(e) = writer.write_all(s.as_bytes()) {
        log::debug!("render output failed, skipping remaining writes: {e}");
        *error = Some(RenderError::Write(e));
    }
}

/// Owns an output sink and the state of one render pass over it.
///
/// Unbuffered sinks receive many small writes; wrap files and sockets in a
/// [`std::io::BufWriter`].
///
/// ```
/// use mxoxide::render::{text, Renderer};
///
/// let mut renderer = Renderer::new(Vec::new());
/// renderer.render(|n| n.h1(None, text("Title")));
/// let bytes = renderer.finish().unwrap();
/// assert_eq!(bytes, b"<h1>Title</h1>");
/// ```
#[derive(Debug)]
pub struct Renderer<W> {
    writer: W,
    state: State,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer with default options.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, RenderOptions::default())
    }

    /// Creates a renderer with the given options.
    #[must_use]
    pub fn with_options(writer: W, options: RenderOptions) -> Self {
        Self {
            writer,
            state: State::new(options),
        }
    }

    /// Returns a render context writing to this renderer's sink.
    pub fn node(&mut self) -> Node<'_> {
        Node {
            writer: &mut self.writer,
            state: &mut self.state,
            hook: None,
        }
    }

    /// Runs `component` against a fresh context on this renderer.
    pub fn render<F>(&mut self, component: F) -> &mut Self
    where
        F: FnOnce(&mut Node<'_>),
    {
        component(&mut self.node());
        self
    }

    /// Returns the first write error, if any.
    #[must_use]
    pub fn err(&self) -> Option<&RenderError> {
        self.state.error.as_ref()
    }

    /// Returns the sink, discarding any latched error.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Flushes the sink and returns it, or the first write error.
    ///
    /// # Errors
    ///
    /// Returns the latched write error, or the flush error if flushing fails.
    pub fn finish(mut self) -> Result<W, RenderError> {
        if let Some(err) = self.state.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Renders `component` into `writer`.
///
/// # Errors
///
/// Returns the first write error. Output up to the failed write has been
/// written; everything after it was skipped.
pub fn render<W, F>(writer: W, options: &RenderOptions, component: F) -> Result<W, RenderError>
where
    W: Write,
    F: FnOnce(&mut Node<'_>),
{
    let mut renderer = Renderer::with_options(writer, options.clone());
    renderer.render(component);
    renderer.finish()
}

/// Renders `component` to a `String`.
#[must_use]
pub fn render_to_string<F>(options: &RenderOptions, component: F) -> String
where
    F: FnOnce(&mut Node<'_>),
{
    let mut renderer = Renderer::with_options(Vec::new(), options.clone());
    renderer.render(component);
    // Every write is a `&str`, so the buffer is valid UTF-8.
    String::from_utf8(renderer.into_inner())
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Returns a child callback that writes escaped text.
pub fn text<'s>(text: impl Into<Cow<'s, str>>) -> impl Fn(&mut Node<'_>) + 's {
    let text = text.into();
    move |n| n.text(&text)
}

/// Returns a child callback that writes `html` unescaped.
pub fn raw<'s>(html: impl Into<Cow<'s, str>>) -> impl Fn(&mut Node<'_>) + 's {
    let html = html.into();
    move |n| n.raw(&html)
}

/// Returns a child callback that writes formatted, escaped text.
///
/// ```
/// use mxoxide::render::{render_to_string, RenderOptions};
/// use mxoxide::textf;
///
/// let count = 3;
/// let html = render_to_string(&RenderOptions::default(), |n| n.span(None, textf!("{count} items")));
/// assert_eq!(html, "<span>3 items</span>");
/// ```
#[macro_export]
macro_rules! textf {
    ($($arg:tt)*) => {
        $crate::render::text(::std::format!($($arg)*))
    };
}
