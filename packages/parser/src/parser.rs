use crate::ast::{Watch, WatchFile};
use crate::error::{ParseError, ParseResult};
use crate::options::split_options;
use crate::tokenizer::{tokenize_lines, LogicalLine};
use once_cell::sync::Lazy;
use regex::Regex;

/// Format versions this parser understands
pub const SUPPORTED_VERSIONS: std::ops::RangeInclusive<u32> = 1..=4;

/// Matches a URL whose final path segment carries the version-matching
/// group, in which case that segment is really the pattern field
static PATTERN_IN_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/([^/]*\([^/]+\)[^/]*)$").expect("pattern-in-url regex"));

/// Parse watch file text into a structured document.
///
/// Returns `Ok(None)` when the input holds no content at all (only
/// comments and blank lines), which is distinct from a versioned document
/// with zero entries.
pub fn parse(source: &str) -> ParseResult<Option<WatchFile>> {
    WatchFile::from_lines(source.lines())
}

impl WatchFile {
    /// Parse a watch file from pre-split input lines
    pub fn from_lines<I>(lines: I) -> ParseResult<Option<WatchFile>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Parser::new().parse_document(&tokenize_lines(lines))
    }
}

/// Parser for watch file documents.
///
/// Accumulates the declared version, global options and entries while
/// walking the logical lines; the version is consulted at every
/// version-dependent decision point (continuation folding, minimum entry
/// shape) rather than selecting a per-version parser.
struct Parser {
    version: Option<u32>,
    options: Vec<String>,
    entries: Vec<Watch>,
}

impl Parser {
    fn new() -> Self {
        Self {
            version: None,
            options: Vec::new(),
            entries: Vec::new(),
        }
    }

    fn parse_document(mut self, logical: &[LogicalLine]) -> ParseResult<Option<WatchFile>> {
        if logical.is_empty() {
            return Ok(None);
        }

        for ll in logical {
            // Continuation folding depends on the declared version; before
            // any declaration chunks join verbatim.
            let folded = ll.fold(self.version.unwrap_or(3));
            let line = folded.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(value) = version_declaration(line) {
                self.declare_version(ll.line, value)?;
                continue;
            }

            match self.version {
                Some(declared) => self.parse_content_line(declared, ll.line, line)?,
                None => return Err(ParseError::missing_version(ll.line)),
            }
        }

        match self.version {
            Some(declared) => Ok(Some(WatchFile {
                version: declared,
                options: self.options,
                entries: self.entries,
            })),
            // every logical line folded to nothing
            None => Err(ParseError::missing_version(logical[logical.len() - 1].line)),
        }
    }

    fn declare_version(&mut self, line_no: usize, value: &str) -> ParseResult<()> {
        let declared = value
            .parse::<u32>()
            .map_err(|_| ParseError::invalid_version(line_no, value))?;
        if !SUPPORTED_VERSIONS.contains(&declared) {
            return Err(ParseError::unsupported_version(line_no, declared));
        }
        self.version = Some(declared);
        Ok(())
    }

    /// Parse one folded non-version line: either a standalone `opts=` line
    /// feeding the document options, or an entry with an optional local
    /// `opts=` prefix
    fn parse_content_line(&mut self, version: u32, line_no: usize, line: &str) -> ParseResult<()> {
        let (opts_value, rest) = match line.strip_prefix("opts=") {
            Some(value) => {
                if let Some(quoted) = value.strip_prefix('"') {
                    // a quoted value may contain whitespace; it runs to the
                    // closing quote
                    let end = quoted.find('"').ok_or_else(|| {
                        ParseError::malformed_entry(line_no, "unterminated quote in opts value")
                    })?;
                    (Some(&quoted[..end]), quoted[end + 1..].trim())
                } else {
                    match value.split_once(|c: char| c.is_whitespace()) {
                        Some((head, tail)) => (Some(head), tail.trim()),
                        None => (Some(value), ""),
                    }
                }
            }
            None => (None, line),
        };

        let local_options = opts_value.map(split_options);
        if rest.is_empty() {
            // standalone opts= line: the options apply document-wide
            self.options.extend(local_options.unwrap_or_default());
            return Ok(());
        }
        self.entries
            .push(parse_entry(version, line_no, rest, local_options)?);
        Ok(())
    }
}

/// Recognize `version = N`, tolerating whitespace around the `=`
fn version_declaration(line: &str) -> Option<&str> {
    let (key, value) = line.split_once('=')?;
    if key.trim() == "version" {
        Some(value.trim())
    } else {
        None
    }
}

/// Parse the positional fields of an entry: url, then pattern, policy and
/// script, with the pattern possibly split out of the url itself
fn parse_entry(
    version: u32,
    line_no: usize,
    text: &str,
    options: Option<Vec<String>>,
) -> ParseResult<Watch> {
    let (url, rest) = match text.split_once(|c: char| c.is_whitespace()) {
        Some((head, tail)) => (head, tail.trim_start()),
        None => (text, ""),
    };

    let mut fields: Vec<String> = Vec::new();
    let url = match PATTERN_IN_URL.captures(url).and_then(|caps| caps.get(1)) {
        Some(segment) => {
            // the last path segment is the pattern; the url keeps
            // everything before the separating slash
            fields.push(segment.as_str().to_string());
            fields.extend(split_fields(rest, 2));
            &url[..segment.start() - 1]
        }
        None => {
            fields.extend(split_fields(rest, 3));
            url
        }
    };

    let mut fields = fields.into_iter();
    let matching_pattern = fields.next();
    let version_policy = fields.next();
    let script = fields.next();

    if version <= 3 && matching_pattern.is_none() {
        return Err(ParseError::malformed_entry(
            line_no,
            "version 3 entry needs a url and a matching pattern",
        ));
    }

    Ok(Watch {
        url: url.to_string(),
        matching_pattern,
        version_policy,
        script,
        options,
    })
}

/// Split on whitespace into at most `max` fields; the final field takes
/// the remainder with runs of whitespace collapsed to single spaces
fn split_fields(text: &str, max: usize) -> Vec<String> {
    let mut fields = Vec::new();
    let mut rest = text.trim();
    while !rest.is_empty() {
        if fields.len() + 1 == max {
            fields.push(rest.split_whitespace().collect::<Vec<_>>().join(" "));
            return fields;
        }
        match rest.split_once(|c: char| c.is_whitespace()) {
            Some((head, tail)) => {
                fields.push(head.to_string());
                rest = tail.trim_start();
            }
            None => {
                fields.push(rest.to_string());
                rest = "";
            }
        }
    }
    fields
}
