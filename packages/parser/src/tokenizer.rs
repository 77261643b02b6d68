/// A logical line: one or more backslash-continued physical lines.
///
/// The physical fragments are kept separate because the join rule depends
/// on the declared format version, which is only known once the first
/// logical line has been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based number of the physical line this logical line starts on
    pub line: usize,
    /// Physical fragments with the trailing continuation backslash removed
    pub chunks: Vec<String>,
}

impl LogicalLine {
    /// Join the physical fragments into grammar text.
    ///
    /// Format versions 4 and later trim leading whitespace from every
    /// fragment; version 3 and older keep fragments verbatim. No separator
    /// is inserted either way, so continuation is literal concatenation.
    pub fn fold(&self, version: u32) -> String {
        if version > 3 {
            self.chunks
                .iter()
                .map(|chunk| chunk.trim_start())
                .collect()
        } else {
            self.chunks.concat()
        }
    }
}

/// Tokenize a source string into logical lines
pub fn tokenize(source: &str) -> Vec<LogicalLine> {
    tokenize_lines(source.lines())
}

/// Tokenize pre-split input lines into logical lines.
///
/// Comment lines (first non-whitespace character `#`) and blank lines are
/// dropped at the physical-line level, before continuation joining — a
/// comment between the two halves of a continued block does not break the
/// continuation. A dangling backslash on the final line is tolerated.
pub fn tokenize_lines<I>(lines: I) -> Vec<LogicalLine>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut logical = Vec::new();
    let mut chunks: Vec<String> = Vec::new();
    let mut start = 0;

    for (idx, raw) in lines.into_iter().enumerate() {
        let raw = raw.as_ref();
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if chunks.is_empty() {
            start = idx + 1;
        }
        let stripped = raw.trim_end();
        if let Some(continued) = stripped.strip_suffix('\\') {
            chunks.push(continued.to_string());
        } else {
            chunks.push(raw.to_string());
            logical.push(LogicalLine {
                line: start,
                chunks: std::mem::take(&mut chunks),
            });
        }
    }
    if !chunks.is_empty() {
        logical.push(LogicalLine {
            line: start,
            chunks,
        });
    }

    logical
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines() {
        let lines = tokenize("version=4\nhttps://example.com/foo-(.+).tar.gz\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chunks, vec!["version=4"]);
        assert_eq!(lines[0].line, 1);
        assert_eq!(lines[1].line, 2);
    }

    #[test]
    fn test_comments_and_blanks_dropped() {
        let lines = tokenize("# header\n\nversion=4\n   # indented comment\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].chunks, vec!["version=4"]);
        assert_eq!(lines[0].line, 3);
    }

    #[test]
    fn test_continuation_collects_chunks() {
        let lines = tokenize("opts=a,\\\n    b https://example.com x-(.+).tar.gz\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].chunks,
            vec!["opts=a,", "    b https://example.com x-(.+).tar.gz"]
        );
    }

    #[test]
    fn test_comment_inside_continuation() {
        let lines = tokenize("opts=a,\\\n# not part of the entry\n    b\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].chunks, vec!["opts=a,", "    b"]);
    }

    #[test]
    fn test_trailing_whitespace_after_backslash() {
        // the backslash still continues when followed by trailing spaces
        let lines = tokenize("opts=a,\\   \n    b\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].chunks, vec!["opts=a,", "    b"]);
    }

    #[test]
    fn test_dangling_backslash_at_eof() {
        let lines = tokenize("version=4\nhttps://example.com x-(.+).tar.gz\\");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].chunks, vec!["https://example.com x-(.+).tar.gz"]);
    }

    #[test]
    fn test_fold_is_version_dependent() {
        let line = LogicalLine {
            line: 1,
            chunks: vec!["opts=a, ".to_string(), "   b c".to_string()],
        };
        assert_eq!(line.fold(3), "opts=a,    b c");
        assert_eq!(line.fold(4), "opts=a, b c");
    }

    #[test]
    fn test_fold_preserves_space_before_backslash() {
        let lines = tokenize("opts=a \\\nb\n");
        assert_eq!(lines[0].fold(3), "opts=a b");
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("# only comments\n\n").is_empty());
    }
}
