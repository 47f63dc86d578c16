//! The result of a fragment build.

use std::ops::Range;

use oneside_convert::{InvertedLineNumberConvertor, LineNumberConvertor};
use oneside_types::{DiffFragment, LineRange, Side};
use serde::Serialize;

/// One change as laid out in the combined text.
///
/// `range1` and `range2` are the byte spans contributed by the left and the
/// right document. Either may be empty (pure insertion or deletion), in
/// which case it sits at the point where the other side's lines begin or end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangedBlock {
    pub range1: Range<usize>,
    pub range2: Range<usize>,
    /// First combined line of the block.
    pub line_start: usize,
    /// Combined line just past the block.
    pub line_end: usize,
    /// Character spans, kept only when inline highlighting is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_fragments: Option<Vec<DiffFragment>>,
}

impl ChangedBlock {
    /// Byte span contributed by `side`.
    pub fn range(&self, side: Side) -> Range<usize> {
        side.select(self.range1.clone(), self.range2.clone())
    }

    pub fn lines(&self) -> LineRange {
        LineRange::new(self.line_start, self.line_end)
    }
}

/// Maps a run of combined text back to the original text it was copied
/// from, so a syntax highlighter can re-project per-document tokens.
///
/// Both spans have the same length. A `\n` written after a run whose source
/// ended without one falls between two runs and belongs to neither.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HighlightRange {
    pub side: Side,
    pub combined: Range<usize>,
    pub original: Range<usize>,
}

/// A combined one-sided view of two documents.
///
/// Immutable once built. A recomputation produces a new value; consumers
/// swap it in wholesale.
#[derive(Clone, Debug, Serialize)]
pub struct CombinedDiff {
    /// The combined text.
    pub text: String,
    /// Number of lines in [`text`](Self::text).
    pub line_count: usize,
    /// Changed blocks in combined-line order.
    pub blocks: Vec<ChangedBlock>,
    pub highlight_ranges: Vec<HighlightRange>,
    /// Combined lines that stand in for elided unchanged regions.
    pub separator_lines: Vec<usize>,
    /// `true` when there were no fragments to show.
    pub is_equal: bool,
    /// Side that supplied the text of shared lines.
    pub master_side: Side,
    #[serde(skip)]
    pub convertor: LineNumberConvertor,
    #[serde(skip)]
    pub inverted_convertor: InvertedLineNumberConvertor,
}

impl CombinedDiff {
    /// Combined line ranges of every changed block.
    pub fn changed_lines(&self) -> Vec<LineRange> {
        self.blocks.iter().map(ChangedBlock::lines).collect()
    }

    /// The block covering combined `line`, if any.
    pub fn block_at(&self, line: usize) -> Option<&ChangedBlock> {
        let idx = self.blocks.partition_point(|block| block.line_end <= line);
        self.blocks.get(idx).filter(|block| block.lines().contains(line))
    }

    pub fn is_separator(&self, line: usize) -> bool {
        self.separator_lines.binary_search(&line).is_ok()
    }

    /// Lines of the combined text, without terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.text.split_terminator('\n')
    }
}
