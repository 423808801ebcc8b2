//! Host-side glue around the classifier.
//!
//! Everything an editor needs to put the classifier to work:
//!
//! - `content_type` - binds `.mke` / `.mki` files to the `Make` content type
//! - `styles` - presentation metadata per category
//! - `document` - hands lines or windows of a document to a classifier
//! - `render` - layers overlapping spans and draws them to a terminal

pub mod content_type;
pub mod document;
pub mod render;
pub mod styles;
