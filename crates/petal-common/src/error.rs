use std::{error::Error, fmt::Debug};

use ariadne::{Label, Report};
use backtrace::Backtrace;
use smallvec::{smallvec, SmallVec};

use crate::{report, Span};

///Common error type of the petal crates. Wraps any `E: Error` and lets you
/// attach source labels that are rendered when calling [PetalError::report].
///
/// You are encouraged to derive the inner `E` via [thiserror](https://docs.rs/thiserror),
/// and use this wrapper only to carry the source locations. If `PETAL_BACKTRACE`
/// is set, each wrapper also records where it was created.
pub struct PetalError<E: Error> {
    pub error: E,
    pub source_span: Option<Span>,
    ///All labels that might be attached to the error.
    pub labels: SmallVec<[Label<Span>; 4]>,
    backtrace: Option<Backtrace>,
}

impl<E: Error> PetalError<E> {
    pub fn new(error: E) -> Self {
        PetalError {
            error,
            source_span: None,
            labels: SmallVec::new(),
            backtrace: capture_backtrace(),
        }
    }

    ///Creates an error that reports `message` at the given `span`.
    pub fn error_here(error: E, span: Span, message: impl ToString) -> Self {
        PetalError {
            error,
            source_span: Some(span.clone()),
            labels: smallvec![Label::new(span).with_message(message)],
            backtrace: capture_backtrace(),
        }
    }

    ///Pushes a simple _info_ label to the error.
    pub fn with_label(mut self, span: Span, message: impl ToString) -> Self {
        self.labels.push(Label::new(span).with_message(message));
        self
    }

    ///Renders the full error, with all labels, to stderr.
    pub fn report(&self) {
        let reporter = if let Some(source_span) = &self.source_span {
            Report::build(
                ariadne::ReportKind::Error,
                std::path::Path::new(source_span.file.as_str()),
                source_span.byte_start,
            )
        } else {
            Report::build(
                ariadne::ReportKind::Error,
                std::path::Path::new("unknown file"),
                0,
            )
        }
        .with_config(ariadne::Config::default().with_index_type(ariadne::IndexType::Byte))
        .with_message(self.error.to_string())
        .with_labels(self.labels.clone());

        report(reporter.finish());

        if let Some(bt) = &self.backtrace {
            eprintln!("Backtrace:\n{:?}", bt);
        }
    }
}

fn capture_backtrace() -> Option<Backtrace> {
    if std::env::var("PETAL_BACKTRACE").is_ok() {
        Some(Backtrace::new())
    } else {
        None
    }
}

impl<E: Error> Debug for PetalError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(src_span) = &self.source_span {
            if let Some(file) = src_span.get_file() {
                write!(
                    f,
                    "{} [{}:{}..{}:{}]: {}",
                    file,
                    src_span.from.0,
                    src_span.from.1,
                    src_span.to.0,
                    src_span.to.1,
                    self.error
                )
            } else {
                write!(
                    f,
                    "[{}:{}..{}:{}]: {}",
                    src_span.from.0, src_span.from.1, src_span.to.0, src_span.to.1, self.error
                )
            }
        } else {
            write!(f, "{}", self.error)
        }
    }
}
