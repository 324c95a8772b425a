//! Analyzer: entry points from source text to a symbol graph.
//!
//! The `Analyzer` owns the immutable extraction configuration and runs
//! the whole pipeline for one file at a time. Files are independent, so
//! batches run in parallel with no shared mutable state.
//!
//! ## Usage
//!
//! ```ignore
//! let analyzer = Analyzer::new(ExtractorConfig::default());
//!
//! let analysis = analyzer.analyze("pkg/app.py", source);
//! let json = analysis.to_record().to_json()?;
//!
//! let results = analyzer.analyze_batch(&inputs);
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use rowan::{TextRange, TextSize};
use thiserror::Error;

use crate::base::constants;
use crate::base::{LineIndex, Span};
use crate::hir::{
    Diagnostic, DiagnosticCollector, ExtractionResult, FileRecord, SymbolGraph, codes,
    extract_symbols,
};
use crate::parser::{Parse, parse};
use crate::project::ExtractorConfig;

/// Fatal conditions: the file produced no graph.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input is not valid UTF-8.
    #[error("{path}: invalid UTF-8 at byte {offset}")]
    InvalidEncoding {
        path: String,
        offset: usize,
        diagnostic: Box<Diagnostic>,
    },

    /// The path does not name a Python source file.
    #[error("{path}: unsupported file extension")]
    UnsupportedExtension { path: String },
}

impl AnalysisError {
    /// Diagnostics to report for the failed file
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Self::InvalidEncoding { diagnostic, .. } => vec![(**diagnostic).clone()],
            Self::UnsupportedExtension { .. } => Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::InvalidEncoding { path, .. } | Self::UnsupportedExtension { path } => path,
        }
    }
}

/// One file handed to [`Analyzer::analyze_batch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceInput {
    pub path: String,
    pub bytes: Vec<u8>,
}

impl SourceInput {
    pub fn new(path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            bytes: bytes.into(),
        }
    }
}

/// Everything produced for one file.
#[derive(Clone, Debug)]
pub struct FileAnalysis {
    pub graph: SymbolGraph,
    /// Parse and extraction diagnostics, ordered by position
    pub diagnostics: Vec<Diagnostic>,
    pub parse: Parse,
}

impl FileAnalysis {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Serializable form of the graph and diagnostics
    pub fn to_record(&self) -> FileRecord {
        FileRecord::new(&self.graph, &self.diagnostics)
    }
}

/// Runs the lexer, parser, extractor and graph builder.
#[derive(Clone, Debug, Default)]
pub struct Analyzer {
    config: Arc<ExtractorConfig>,
}

impl Analyzer {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Check whether a path has a Python source extension
    pub fn is_supported_path(path: &str) -> bool {
        constants::is_supported_path(path)
    }

    /// Analyze decoded source text.
    ///
    /// Never fails: syntax errors are reported as diagnostics next to a
    /// best-effort graph. The extension of `path` is not checked.
    pub fn analyze(&self, path: &str, text: &str) -> FileAnalysis {
        let parse = parse(text);
        let result = match parse.source_file() {
            Some(file) => extract_symbols(path, text, &file, &self.config),
            None => ExtractionResult::default(),
        };

        let path: Arc<str> = Arc::from(path);
        let line_index = LineIndex::new(text);
        let mut collector = DiagnosticCollector::new();
        collector.add_syntax_errors(&path, &parse.errors, &line_index);
        collector.extend(result.diagnostics.iter().cloned());

        let graph = SymbolGraph::build(path.clone(), result);
        let diagnostics = collector.finish();
        tracing::debug!(
            path = %path,
            symbols = graph.len(),
            diagnostics = diagnostics.len(),
            "analyzed file"
        );
        FileAnalysis {
            graph,
            diagnostics,
            parse,
        }
    }

    /// Analyze raw file content.
    ///
    /// Fails only for unsupported extensions and content that is not UTF-8.
    pub fn analyze_bytes(&self, path: &str, bytes: &[u8]) -> Result<FileAnalysis, AnalysisError> {
        if !Self::is_supported_path(path) {
            return Err(AnalysisError::UnsupportedExtension {
                path: path.to_string(),
            });
        }
        let text = std::str::from_utf8(bytes).map_err(|error| {
            let offset = error.valid_up_to();
            tracing::warn!(path, offset, "input is not valid UTF-8");
            AnalysisError::InvalidEncoding {
                path: path.to_string(),
                offset,
                diagnostic: Box::new(encoding_diagnostic(path, bytes, &error)),
            }
        })?;
        Ok(self.analyze(path, text))
    }

    /// Analyze many files in parallel; results follow input order.
    pub fn analyze_batch(&self, inputs: &[SourceInput]) -> Vec<Result<FileAnalysis, AnalysisError>> {
        inputs
            .par_iter()
            .map(|input| self.analyze_bytes(&input.path, &input.bytes))
            .collect()
    }
}

/// The single diagnostic of an undecodable file, at the first bad byte
fn encoding_diagnostic(path: &str, bytes: &[u8], error: &std::str::Utf8Error) -> Diagnostic {
    let offset = error.valid_up_to();
    let len = error.error_len().unwrap_or(bytes.len() - offset);
    let range = TextRange::at(
        TextSize::new(offset as u32),
        TextSize::new(len as u32),
    );

    let prefix = std::str::from_utf8(&bytes[..offset]).unwrap_or_default();
    let start = LineIndex::new(prefix).line_col(TextSize::of(prefix));
    let span = Span::new(start.into(), start.into());

    Diagnostic::error(
        Arc::from(path),
        range,
        span,
        format!("file is not valid UTF-8 (invalid byte at offset {offset})"),
    )
    .with_code(codes::INVALID_ENCODING)
}
