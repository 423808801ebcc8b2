//! Utility macros for the classifier.
//!
//! This module defines helper macros used by the classifier passes:
//!
//! - `MK_SPAN!` - Creates a ClassifiedSpan instance
//! - `MK_DEFAULT_HANDLER!` - Creates a pass handler that tags every match
//!
//! These macros reduce boilerplate in the pass table.

/// Creates a ClassifiedSpan instance.
///
/// # Arguments
///
/// * `$category` - The Category
/// * `$start` - Absolute start offset in the document
/// * `$len` - Length in bytes
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(Category::Number, 4, 2);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($category:expr, $start:expr, $len:expr) => {
        ClassifiedSpan {
            start: $start,
            len: $len,
            category: $category,
        }
    };
}

/// Creates a pass handler that emits one span per non-overlapping match.
///
/// Generates a handler function that walks every match of the pass regex in
/// the fragment and tags it with the given category. The handler never stops
/// the classification early.
///
/// # Arguments
///
/// * `$category` - The Category to tag matches with
///
/// # Example
///
/// ```ignore
/// ClassifierPass {
///     regex: Regex::new("\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(Category::Operator),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($category:expr) => {{
        fn handler(classification: &mut Classification<'_>, regex: &Regex) -> ControlFlow<()> {
            let text = classification.text();
            for matched in regex.find_iter(text) {
                classification.push_match($category, matched);
            }

            ControlFlow::Continue(())
        }

        handler as PassHandler
    }};
}
