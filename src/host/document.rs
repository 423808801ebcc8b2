use std::{
    fs,
    ops::Range,
    panic,
    path::{Path, PathBuf},
    thread,
};

use tracing::debug;

use crate::{
    classifier::{
        classifier::SpanClassifier,
        spans::{ClassifiedSpan, TextFragment},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::content_type::content_type_for;

/// Full text of a bmake file, as the host holds it.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    path: Option<PathBuf>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Document {
            text: text.into(),
            path: None,
        }
    }

    /// Reads a `.mke` / `.mki` file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        content_type_for(path)?;

        let text = fs::read_to_string(path).map_err(|err| {
            Error::new(ErrorImpl::FileRead {
                path: path.to_string_lossy().into_owned(),
                message: err.to_string(),
            })
        })?;

        debug!(path = %path.display(), bytes = text.len(), "loaded document");

        Ok(Document {
            text,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// One fragment per line, without its `\n` or `\r\n` terminator.
    pub fn lines(&self) -> impl Iterator<Item = TextFragment<'_>> {
        let mut start = 0;

        self.text.split_inclusive('\n').map(move |line| {
            let content = line.strip_suffix('\n').unwrap_or(line);
            let content = content.strip_suffix('\r').unwrap_or(content);
            let fragment = TextFragment::new(content, start);
            start += line.len();
            fragment
        })
    }

    /// A fragment covering `range`, which may span several lines.
    pub fn window(&self, range: Range<usize>) -> Result<TextFragment<'_>, Error> {
        if range.start > range.end || range.end > self.text.len() {
            return Err(Error::at(
                ErrorImpl::WindowOutOfBounds {
                    start: range.start,
                    end: range.end,
                    len: self.text.len(),
                },
                range.start.min(self.text.len()),
            ));
        }

        for offset in [range.start, range.end] {
            if !self.text.is_char_boundary(offset) {
                return Err(Error::at(ErrorImpl::WindowNotOnCharBoundary { offset }, offset));
            }
        }

        Ok(TextFragment::new(&self.text[range.clone()], range.start))
    }
}

/// Classifies `document` line by line. Spans come out in line order.
pub fn classify_document(classifier: &SpanClassifier, document: &Document) -> Vec<ClassifiedSpan> {
    let spans: Vec<ClassifiedSpan> = document
        .lines()
        .flat_map(|line| classifier.classify(line))
        .collect();

    debug!(bytes = document.len(), spans = spans.len(), "classified document");
    spans
}

/// Same output as [`classify_document`], with the lines split into
/// contiguous chunks across `workers` threads.
pub fn classify_document_parallel(
    classifier: &SpanClassifier,
    document: &Document,
    workers: usize,
) -> Result<Vec<ClassifiedSpan>, Error> {
    if workers == 0 {
        return Err(Error::new(ErrorImpl::InvalidWorkerCount));
    }

    let lines: Vec<TextFragment<'_>> = document.lines().collect();
    if workers == 1 || lines.len() < 2 {
        return Ok(classify_document(classifier, document));
    }

    let chunk_size = lines.len().div_ceil(workers);
    let classifier = *classifier;

    debug!(lines = lines.len(), workers, chunk_size, "classifying document in parallel");

    let spans = thread::scope(|scope| {
        let handles: Vec<_> = lines
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .flat_map(|line| classifier.classify(*line))
                        .collect::<Vec<ClassifiedSpan>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect::<Vec<ClassifiedSpan>>()
    });

    Ok(spans)
}

/// Classifies a host-chosen byte window as a single fragment.
pub fn classify_window(
    classifier: &SpanClassifier,
    document: &Document,
    range: Range<usize>,
) -> Result<Vec<ClassifiedSpan>, Error> {
    let fragment = document.window(range)?;
    Ok(classifier.classify(fragment))
}
