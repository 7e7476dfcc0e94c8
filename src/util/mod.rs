//! Utility modules for mxoxide.
//!
//! Contains the HTML entity escaper shared by text and attribute output.

pub mod escape;
