//! Line-addressable text snapshots.
//!
//! A line ends at `\n` or at end of text. A trailing newline does not open
//! an extra empty line, so `"a\nb\n"` and `"a\nb"` both hold two lines and
//! `""` holds none. Line end offsets exclude the terminator.

use std::ops::Range;

/// A text source addressable by line.
///
/// Line arguments must be below [`line_count`](LineSource::line_count);
/// implementations may panic otherwise.
pub trait LineSource {
    /// The full text.
    fn text(&self) -> &str;

    /// Number of lines in the text.
    fn line_count(&self) -> usize;

    /// Byte offset of the first character of `line`.
    fn line_start_offset(&self, line: usize) -> usize;

    /// Byte offset just past the last character of `line`, before its `\n`.
    fn line_end_offset(&self, line: usize) -> usize;

    /// Content of `line` without its terminator.
    fn line_text(&self, line: usize) -> &str {
        &self.text()[self.line_start_offset(line)..self.line_end_offset(line)]
    }

    /// Byte span covering lines `start..end`, terminators included.
    ///
    /// The last line of the text may lack a terminator; callers appending the
    /// span elsewhere must supply it.
    fn lines_span(&self, start: usize, end: usize) -> Range<usize> {
        if start >= end {
            let offset = if start < self.line_count() {
                self.line_start_offset(start)
            } else {
                self.text().len()
            };
            return offset..offset;
        }
        let from = self.line_start_offset(start);
        let to = if end < self.line_count() {
            self.line_start_offset(end)
        } else {
            self.text().len()
        };
        from..to
    }
}

/// An owned, immutable text snapshot with a precomputed line index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
    /// Byte offset where each line starts.
    line_starts: Vec<usize>,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = Vec::new();
        if !text.is_empty() {
            line_starts.push(0);
            line_starts.extend(
                text.match_indices('\n')
                    .map(|(i, _)| i + 1)
                    .filter(|&start| start < text.len()),
            );
        }
        Self { text, line_starts }
    }

    /// Build a document from lines, terminating each with `\n`.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut text = String::new();
        for line in lines {
            text.push_str(line.as_ref());
            text.push('\n');
        }
        Self::new(text)
    }

    /// Iterate line contents without terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.line_count()).map(move |line| self.line_text(line))
    }
}

impl LineSource for TextDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_start_offset(&self, line: usize) -> usize {
        self.line_starts[line]
    }

    fn line_end_offset(&self, line: usize) -> usize {
        match self.line_starts.get(line + 1) {
            Some(&next) => next - 1,
            None => {
                assert!(line < self.line_starts.len(), "line {line} out of bounds");
                self.text.strip_suffix('\n').unwrap_or(&self.text).len()
            }
        }
    }
}
