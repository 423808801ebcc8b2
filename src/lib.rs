#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod classifier;
pub mod errors;
pub mod host;
pub mod macros;

extern crate regex;

pub use classifier::{
    classifier::SpanClassifier,
    spans::{Category, ClassifiedSpan, TextFragment},
};

/// Returns the 1-based line number, the line's text and the byte column of
/// `position` within `source`, or `None` if `position` is past the end.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, &str, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return Some((line_number, line, line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}


/// Prints `error` to stderr. When the error points into `source`, the
/// offending line is shown with a caret under the offset.
pub fn display_error(error: &Error, file: &str, source: Option<&str>) {
    /*
        Error: WindowNotOnCharBoundary (Byte 13 is inside a multi-byte character)
        -> build.mke
           |
         3 | NAME = ñ
           | --------^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error);
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", file);

    let Some((line, line_text, line_pos)) = source
        .zip(error.get_offset())
        .and_then(|(source, offset)| get_line_at_position(source, offset))
    else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
