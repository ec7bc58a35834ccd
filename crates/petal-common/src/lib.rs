//! Common diagnosis helpers for the petal crates. This is mostly [Span]
//! information of syntax nodes, as well as their reporting.
//!
//! Source files are made known to the reporting machinery via
//! [register_source]. Any [Span] into a registered file can then be rendered
//! as part of an [ariadne] report.

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use ahash::AHashMap;
use ariadne::Source;
use lazy_static::lazy_static;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod error;
pub use error::PetalError;

///Inline string type used for file names on [Span].
pub type FileString = smallstr::SmallString<[u8; 32]>;

///Source-Code span information.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub file: FileString,
    pub from: (usize, usize),
    pub to: (usize, usize),
    pub byte_start: usize,
    pub byte_end: usize,
}

impl Span {
    pub fn empty() -> Self {
        Span {
            file: FileString::new(),
            from: (0, 0),
            to: (0, 0),
            byte_start: 0,
            byte_end: 0,
        }
    }

    ///Empty span that still points into `file`.
    pub fn with_file(file: impl Into<FileString>) -> Self {
        Span {
            file: file.into(),
            ..Span::empty()
        }
    }

    pub fn get_file(&self) -> Option<&str> {
        if self.file.is_empty() {
            None
        } else {
            Some(self.file.as_str())
        }
    }
}

impl ariadne::Span for Span {
    type SourceId = Path;

    fn source(&self) -> &Self::SourceId {
        Path::new(self.file.as_str())
    }

    fn start(&self) -> usize {
        self.byte_start
    }

    fn end(&self) -> usize {
        self.byte_end
    }
}

lazy_static! {
    ///Map of all source files the reporting was told about.
    static ref SOURCE_REGISTRY: Mutex<AHashMap<String, String>> = Mutex::new(AHashMap::default());
}

///Registers `content` as the text of `file`. Spans into `file` become
/// renderable by [report] afterwards.
pub fn register_source(file: impl Into<FileString>, content: impl Into<String>) {
    let file = file.into();
    let Ok(mut registry) = SOURCE_REGISTRY.lock() else {
        log::warn!("source registry poisoned, dropping {}", file);
        return;
    };
    registry.insert(file.to_string(), content.into());
}

struct RegistryCache(AHashMap<PathBuf, Source<String>>);

impl ariadne::Cache<Path> for RegistryCache {
    type Storage = String;

    fn fetch(&mut self, id: &Path) -> Result<&Source<String>, Box<dyn std::fmt::Debug + '_>> {
        self.0.get(id).ok_or_else(|| {
            Box::new(format!("source {} was never registered", id.display()))
                as Box<dyn std::fmt::Debug>
        })
    }

    fn display<'a>(&self, id: &'a Path) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(id.display()))
    }
}

///Prints `report` to stderr, backed by all registered source files.
pub fn report(report: ariadne::Report<'_, Span>) {
    let cache = {
        let Ok(registry) = SOURCE_REGISTRY.lock() else {
            log::warn!("source registry poisoned, cannot report");
            return;
        };
        let mut sources = AHashMap::default();
        for (file, content) in registry.iter() {
            sources.insert(PathBuf::from(file.as_str()), Source::from(content.clone()));
        }
        RegistryCache(sources)
    };

    if let Err(e) = report.eprint(cache) {
        log::warn!("failed to print report: {}", e);
    }
}
