//! Line-level hunks as produced by the comparison engine.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::side::Side;

/// A half-open range of lines, `start..end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted line range {start}..{end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line < self.end
    }
}

impl From<Range<usize>> for LineRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// A character-level span inside a [`LineFragment`].
///
/// Offsets are byte offsets relative to the start of the fragment's text on
/// each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffFragment {
    pub start_offset1: usize,
    pub end_offset1: usize,
    pub start_offset2: usize,
    pub end_offset2: usize,
}

impl DiffFragment {
    pub fn new(start_offset1: usize, end_offset1: usize, start_offset2: usize, end_offset2: usize) -> Self {
        Self {
            start_offset1,
            end_offset1,
            start_offset2,
            end_offset2,
        }
    }

    /// The byte span on one side.
    pub fn range(&self, side: Side) -> Range<usize> {
        side.select(
            self.start_offset1..self.end_offset1,
            self.start_offset2..self.end_offset2,
        )
    }
}

/// One diff hunk, expressed as line ranges in both documents.
///
/// End lines are exclusive. A fragment list handed to the builder must be
/// sorted and non-overlapping on both sides at once; nothing downstream
/// re-checks that.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFragment {
    pub start_line1: usize,
    pub end_line1: usize,
    pub start_line2: usize,
    pub end_line2: usize,
    /// Character spans inside the hunk, when the comparison computed them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_fragments: Option<Vec<DiffFragment>>,
}

impl LineFragment {
    pub fn new(start_line1: usize, end_line1: usize, start_line2: usize, end_line2: usize) -> Self {
        Self {
            start_line1,
            end_line1,
            start_line2,
            end_line2,
            inner_fragments: None,
        }
    }

    /// Attach character-level spans.
    pub fn with_inner(mut self, inner: Vec<DiffFragment>) -> Self {
        self.inner_fragments = Some(inner);
        self
    }

    pub fn start_line(&self, side: Side) -> usize {
        side.select(self.start_line1, self.start_line2)
    }

    pub fn end_line(&self, side: Side) -> usize {
        side.select(self.end_line1, self.end_line2)
    }

    /// The fragment's lines on one side.
    pub fn lines(&self, side: Side) -> LineRange {
        LineRange::new(self.start_line(side), self.end_line(side))
    }
}
