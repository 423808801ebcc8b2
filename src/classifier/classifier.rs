use std::ops::ControlFlow;

use lazy_static::lazy_static;
use regex::{Match, Regex};
use tracing::trace;

use crate::{MK_DEFAULT_HANDLER, MK_SPAN};

use super::spans::{Category, ClassifiedSpan, TextFragment};

/// A pass handler inspects the fragment with its regex and records spans.
/// Returning `Break` ends classification of the fragment.
pub type PassHandler = fn(&mut Classification<'_>, &Regex) -> ControlFlow<()>;

pub struct ClassifierPass {
    regex: Regex,
    handler: PassHandler,
}

lazy_static! {
    // Order matters: the comment pass may end classification early.
    static ref PASSES: Vec<ClassifierPass> = vec![
        ClassifierPass { regex: Regex::new(r"[^\S\n]*#.+").unwrap(), handler: comment_handler },
        ClassifierPass {
            regex: Regex::new(r"%include\b|%undef\b|%if defined\b|%if\b|%elif\b|%else\b|%endif\b|%warn|%error|always").unwrap(),
            handler: MK_DEFAULT_HANDLER!(Category::Keyword),
        },
        // `$(` may close on `}` and `${` on `)`.
        ClassifierPass { regex: Regex::new(r"(?P<start>\$[({])(?P<value>[\s\S]*?)(?P<end>[)}])").unwrap(), handler: reference_handler },
        ClassifierPass { regex: Regex::new("@").unwrap(), handler: preprocessor_handler },
        ClassifierPass { regex: Regex::new(r"\|\||&&|!=|=|\+").unwrap(), handler: MK_DEFAULT_HANDLER!(Category::Operator) },
        ClassifierPass { regex: Regex::new("\"[^\n\r\"]*\"").unwrap(), handler: MK_DEFAULT_HANDLER!(Category::StringLiteral) },
        ClassifierPass { regex: Regex::new(r"\b\d+(\.\d+)?\b").unwrap(), handler: MK_DEFAULT_HANDLER!(Category::Number) },
    ];
}

/// Accumulates the spans for a single fragment while the passes run.
pub struct Classification<'a> {
    fragment: TextFragment<'a>,
    spans: Vec<ClassifiedSpan>,
}

impl<'a> Classification<'a> {
    fn new(fragment: TextFragment<'a>) -> Self {
        Classification { fragment, spans: vec![] }
    }

    pub fn text(&self) -> &'a str {
        self.fragment.text
    }

    pub fn push(&mut self, span: ClassifiedSpan) {
        self.spans.push(span);
    }

    /// Records `matched` (relative to the fragment) as a span in document coordinates.
    pub fn push_match(&mut self, category: Category, matched: Match<'_>) {
        self.push(MK_SPAN!(category, self.fragment.start + matched.start(), matched.len()));
    }

    /// Like [`Classification::push_match`], but skips groups that did not
    /// participate or matched nothing.
    pub fn push_group(&mut self, category: Category, group: Option<Match<'_>>) {
        match group {
            Some(matched) if !matched.is_empty() => self.push_match(category, matched),
            _ => {}
        }
    }

    pub fn into_spans(self) -> Vec<ClassifiedSpan> {
        self.spans
    }
}

fn comment_handler(classification: &mut Classification<'_>, regex: &Regex) -> ControlFlow<()> {
    let Some(comment) = regex.find(classification.text()) else {
        return ControlFlow::Continue(());
    };

    classification.push_match(Category::Comment, comment);

    // The whole line is a comment, nothing else to find.
    if comment.start() == 0 {
        return ControlFlow::Break(());
    }

    ControlFlow::Continue(())
}

fn reference_handler(classification: &mut Classification<'_>, regex: &Regex) -> ControlFlow<()> {
    let text = classification.text();
    for captures in regex.captures_iter(text) {
        classification.push_group(Category::ReferenceDelimiter, captures.name("start"));
        classification.push_group(Category::ReferenceValue, captures.name("value"));
        classification.push_group(Category::ReferenceDelimiter, captures.name("end"));
    }

    ControlFlow::Continue(())
}

fn preprocessor_handler(classification: &mut Classification<'_>, regex: &Regex) -> ControlFlow<()> {
    if let Some(marker) = regex.find(classification.text()) {
        classification.push_match(Category::PreprocessorMarker, marker);
    }

    ControlFlow::Continue(())
}

/// Tags bmake source text with presentation categories.
///
/// The classifier holds no state of its own; the compiled patterns are shared
/// process-wide, so a single instance can be copied freely and used from any
/// number of threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanClassifier {
    _private: (),
}

impl SpanClassifier {
    pub fn new() -> Self {
        SpanClassifier { _private: () }
    }

    /// Classifies one fragment. Spans are returned grouped by pass, in pass
    /// order, and may overlap. Never fails: text a pass does not recognise
    /// simply produces no spans for it.
    pub fn classify(&self, fragment: TextFragment<'_>) -> Vec<ClassifiedSpan> {
        if fragment.is_blank() {
            return vec![];
        }

        let mut classification = Classification::new(fragment);

        for pass in PASSES.iter() {
            if (pass.handler)(&mut classification, &pass.regex).is_break() {
                trace!(start = fragment.start, "full-line comment, skipping remaining passes");
                break;
            }
        }

        let spans = classification.into_spans();
        trace!(start = fragment.start, len = fragment.text.len(), spans = spans.len(), "classified fragment");
        spans
    }
}

/// Classifies `fragment` with a fresh [`SpanClassifier`].
pub fn classify(fragment: TextFragment<'_>) -> Vec<ClassifiedSpan> {
    SpanClassifier::new().classify(fragment)
}
