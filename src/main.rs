use std::{ops::Range, path::PathBuf, process::ExitCode, time::Instant};

use bmake_classifier::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    get_line_at_position,
    host::{
        document::{classify_document, classify_document_parallel, classify_window, Document},
        render::render_ansi,
        styles::StyleTable,
    },
    ClassifiedSpan, SpanClassifier,
};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
enum Mode {
    /// One line per classified span.
    #[default]
    Spans,
    /// The document, coloured by category.
    Highlight,
}

/// Classifies a bmake (`.mke` / `.mki`) file for syntax highlighting.
#[derive(Parser, Debug)]
#[command(name = "bmake-classify", version)]
struct Cli {
    /// The file to classify.
    #[arg(value_name = "FILE")]
    file: PathBuf,
    /// What to print.
    #[arg(long, value_enum, default_value_t = Mode::Spans)]
    mode: Mode,
    /// Number of threads used to classify lines.
    #[arg(long, default_value_t = 1)]
    workers: usize,
    /// Classify only this byte window, as a single fragment.
    #[arg(long, value_name = "START..END", value_parser = parse_window)]
    window: Option<Range<usize>>,
}

fn parse_window(value: &str) -> Result<Range<usize>, String> {
    let (start, end) = value
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got `{value}`"))?;
    let start = start.trim().parse::<usize>().map_err(|err| format!("bad window start: {err}"))?;
    let end = end.trim().parse::<usize>().map_err(|err| format!("bad window end: {err}"))?;

    Ok(start..end)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let file_name = cli.file.to_string_lossy().into_owned();

    let document = match Document::load(&cli.file) {
        Ok(document) => document,
        Err(error) => {
            display_error(&error, &file_name, None);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let spans = match classify(&cli, &document) {
        Ok(spans) => spans,
        Err(error) => {
            display_error(&error, &file_name, Some(document.text()));
            return ExitCode::FAILURE;
        }
    };
    debug!(elapsed = ?start.elapsed(), spans = spans.len(), "classified {}", file_name);

    match cli.mode {
        Mode::Spans => print_spans(document.text(), &spans),
        Mode::Highlight => print!("{}", render_ansi(document.text(), &spans, &StyleTable::default())),
    }

    ExitCode::SUCCESS
}

fn classify(cli: &Cli, document: &Document) -> Result<Vec<ClassifiedSpan>, Error> {
    let classifier = SpanClassifier::new();

    if let Some(window) = &cli.window {
        return classify_window(&classifier, document, window.clone());
    }

    match cli.workers {
        0 => Err(Error::new(ErrorImpl::InvalidWorkerCount)),
        1 => Ok(classify_document(&classifier, document)),
        workers => classify_document_parallel(&classifier, document, workers),
    }
}

fn print_spans(source: &str, spans: &[ClassifiedSpan]) {
    for span in spans {
        let Some((line, _, column)) = get_line_at_position(source, span.start) else {
            continue;
        };
        let text = span.text(source).unwrap_or_default();

        println!("{}:{}\t{}\t{}\t{:?}", line, column + 1, span.category, span.len, text);
    }
}
