//! Error types for rendering and code generation.
//!
//! Rendering has exactly one failure mode: the output sink refused a write.
//! That error is never raised mid-tree. The render context latches the first
//! failure and turns every later write into a no-op, so callers inspect it
//! after the render pass returns (see [`crate::render::Node::err`]).
//!
//! The generator has its own small error type, since it runs offline and can
//! fail up front on a bad component name or unreadable input.

use std::io;

use thiserror::Error;

/// The error latched by a render context when the sink fails.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A write to the underlying sink failed. Everything after it was skipped.
    #[error("write to output failed: {0}")]
    Write(#[from] io::Error),
}

impl RenderError {
    /// Returns the I/O error kind of the failed write.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Write(e) => e.kind(),
        }
    }
}

/// The error type returned by the HTML-to-Rust generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The requested component name cannot become a Rust function name.
    #[error("invalid component name {0:?}: expected an identifier such as `Card` or `user_list`")]
    InvalidName(String),
    /// Reading the markup or writing the generated source failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
