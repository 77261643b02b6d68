//! Error types for the watch file parser

use thiserror::Error;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse error with the 1-based physical line it was detected on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: watch file content before any version declaration")]
    MissingVersion { line: usize },

    #[error("line {line}: version declaration {value:?} is not an integer")]
    InvalidVersion { line: usize, value: String },

    #[error("line {line}: watch file format version {version} is not supported")]
    UnsupportedVersion { line: usize, version: u32 },

    #[error("line {line}: malformed entry: {message}")]
    MalformedEntry { line: usize, message: String },
}

impl ParseError {
    pub fn missing_version(line: usize) -> Self {
        Self::MissingVersion { line }
    }

    pub fn invalid_version(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidVersion {
            line,
            value: value.into(),
        }
    }

    pub fn unsupported_version(line: usize, version: u32) -> Self {
        Self::UnsupportedVersion { line, version }
    }

    pub fn malformed_entry(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedEntry {
            line,
            message: message.into(),
        }
    }

    /// The physical line the error was detected on
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingVersion { line } => *line,
            ParseError::InvalidVersion { line, .. } => *line,
            ParseError::UnsupportedVersion { line, .. } => *line,
            ParseError::MalformedEntry { line, .. } => *line,
        }
    }
}

/// Pretty-print an error with source context using ariadne
#[cfg(feature = "pretty-errors")]
pub fn format_error(source: &str, filename: &str, error: &ParseError) -> String {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let span = line_span(source, error.line());
    let mut output = Vec::new();

    let report = Report::build(ReportKind::Error, filename, span.start)
        .with_message(error.to_string())
        .with_label(
            Label::new((filename, span))
                .with_color(Color::Red)
                .with_message(match error {
                    ParseError::MissingVersion { .. } => "expected a version=N line first",
                    ParseError::InvalidVersion { .. } => "not an integer",
                    ParseError::UnsupportedVersion { .. } => "unknown format version",
                    ParseError::MalformedEntry { .. } => "cannot parse this entry",
                }),
        )
        .finish();

    report
        .write((filename, Source::from(source)), &mut output)
        .unwrap();

    String::from_utf8(output).unwrap_or_else(|_| error.to_string())
}

/// Byte range of the given 1-based line within the source text
#[cfg(feature = "pretty-errors")]
fn line_span(source: &str, line: usize) -> std::ops::Range<usize> {
    let mut offset = 0;
    for (idx, text) in source.lines().enumerate() {
        if idx + 1 == line {
            return offset..offset + text.len();
        }
        offset += text.len() + 1;
    }
    source.len().saturating_sub(1)..source.len()
}
