use std::ops::Range;

use crate::classifier::spans::{Category, ClassifiedSpan};

use super::styles::{Style, StyleTable};

/// A stretch of text drawn with a single category, or none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub range: Range<usize>,
    pub category: Option<Category>,
}

/// Flattens overlapping spans into consecutive runs covering `0..text_len`.
/// Where spans overlap, the one that comes later in `spans` wins.
pub fn layer(text_len: usize, spans: &[ClassifiedSpan]) -> Vec<Run> {
    let mut painted: Vec<Option<Category>> = vec![None; text_len];

    for span in spans {
        let end = span.end().min(text_len);
        if span.start >= end {
            continue;
        }
        painted[span.start..end].fill(Some(span.category));
    }

    let mut runs: Vec<Run> = vec![];
    for (offset, category) in painted.into_iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.category == category => run.range.end = offset + 1,
            _ => runs.push(Run {
                range: offset..offset + 1,
                category,
            }),
        }
    }

    runs
}

fn sgr(style: &Style) -> String {
    let mut codes: Vec<String> = vec![];

    if style.bold {
        codes.push(String::from("1"));
    }
    if style.underline {
        codes.push(String::from("4"));
    }
    if let Some(color) = style.foreground {
        codes.push(format!("38;2;{};{};{}", color.r, color.g, color.b));
    }
    if let Some(color) = style.background {
        codes.push(format!("48;2;{};{};{}", color.r, color.g, color.b));
    }

    format!("\x1b[{}m", codes.join(";"))
}

/// Renders `text` with ANSI escape sequences according to `styles`.
/// `spans` must be in the coordinates of `text`.
pub fn render_ansi(text: &str, spans: &[ClassifiedSpan], styles: &StyleTable) -> String {
    let mut result = String::with_capacity(text.len());

    for run in layer(text.len(), spans) {
        let Some(chunk) = text.get(run.range.clone()) else {
            continue;
        };

        match run.category.map(|category| styles.get(category)) {
            Some(style) if !style.is_plain() => {
                // Each line of a styled run is opened and closed separately.
                for (i, line) in chunk.split('\n').enumerate() {
                    if i > 0 {
                        result.push('\n');
                    }
                    if !line.is_empty() {
                        result.push_str(&sgr(style));
                        result.push_str(line);
                        result.push_str("\x1b[0m");
                    }
                }
            }
            _ => result.push_str(chunk),
        }
    }

    result
}
