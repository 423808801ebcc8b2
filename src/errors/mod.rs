//! Error types and error handling for the host side of the classifier.
//!
//! Classification itself never fails. This module covers what can go wrong
//! around it:
//!
//! - Binding a file to the bmake content type
//! - Loading documents from disk
//! - Choosing a window or worker count for document classification
//! - Helpful error messages and suggestions

pub mod errors;
