//! Span classification for bmake source text.
//!
//! This module contains the classifier that tags substrings of a fragment
//! with presentation categories. It handles:
//!
//! - Full-line and trailing comments
//! - `%`-directives and the `always` keyword
//! - `$(...)` / `${...}` macro references, split into delimiters and value
//! - The `@` quiet marker, operators, string literals and numbers
//!
//! Classification is pattern based and never fails; spans from different
//! passes may overlap.

pub mod classifier;
pub mod spans;

#[cfg(test)]
mod tests;
