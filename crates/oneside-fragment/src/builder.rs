//! Merging two documents and their fragments into one combined text.
//!
//! The builder walks the fragment list once. Between two fragments it either
//! copies the whole unchanged gap from the master side, or, when the gap is
//! wider than twice the context range, keeps `k` trailing lines after the
//! previous fragment, emits a separator line, and keeps `k` leading lines
//! before the next one. Fragment bodies are copied from both sides, left
//! first.

use std::ops::Range;

use oneside_convert::ConvertorBuilder;
use oneside_types::{CancelFlag, ContextRange, LineFragment, LineRange, LineSource, Side, TextDocument};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combined::{ChangedBlock, CombinedDiff, HighlightRange};
use crate::error::{FragmentError, FragmentResult};

/// Knobs for a single build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    pub context_range: ContextRange,
    /// Keep character-level spans on the changed blocks.
    pub inline_highlight: bool,
    /// Side whose text is shown for shared lines.
    pub master_side: Side,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            context_range: ContextRange::default(),
            inline_highlight: true,
            master_side: Side::Right,
        }
    }
}

/// Single-use builder for a [`CombinedDiff`].
///
/// `D` is any [`LineSource`]; either document may be absent, in which case
/// it behaves as a document with no lines.
pub struct FragmentBuilder<'a, D: LineSource + ?Sized = TextDocument> {
    fragments: &'a [LineFragment],
    documents: [Option<&'a D>; 2],
    options: BuildOptions,

    text: String,
    line_count: usize,
    /// The last run ended a document without `\n`; written before more text.
    pending_newline: bool,
    /// Lines consumed so far on each side (last processed line + 1).
    processed: [usize; 2],
    started: bool,
    convertor: ConvertorBuilder,
    blocks: Vec<ChangedBlock>,
    highlight_ranges: Vec<HighlightRange>,
    separator_lines: Vec<usize>,
}

impl<'a, D: LineSource + ?Sized> FragmentBuilder<'a, D> {
    pub fn new(
        fragments: &'a [LineFragment],
        document1: Option<&'a D>,
        document2: Option<&'a D>,
        options: BuildOptions,
    ) -> Self {
        Self {
            fragments,
            documents: [document1, document2],
            options,
            text: String::new(),
            line_count: 0,
            pending_newline: false,
            processed: [0, 0],
            started: false,
            convertor: ConvertorBuilder::new(),
            blocks: Vec::with_capacity(fragments.len()),
            highlight_ranges: Vec::new(),
            separator_lines: Vec::new(),
        }
    }

    /// Build the combined view.
    pub fn exec(self) -> FragmentResult<CombinedDiff> {
        self.exec_with(&CancelFlag::new())
    }

    /// Build the combined view, polling `cancel` once per fragment.
    pub fn exec_with(mut self, cancel: &CancelFlag) -> FragmentResult<CombinedDiff> {
        if self.documents.iter().all(Option::is_none) {
            return Err(FragmentError::NoDocuments);
        }
        cancel.check()?;

        if self.fragments.is_empty() {
            return Ok(self.finish_equal());
        }

        let fragments = self.fragments;
        for fragment in fragments {
            cancel.check()?;

            if self.is_connected_to_last(fragment) {
                let gap = self.gap_before(fragment);
                self.append_shared(gap);
            } else {
                if self.started {
                    let trailing = self.options.context_range.clamp(self.gap_before(fragment));
                    self.append_shared(trailing);
                    self.append_separator();
                }
                let leading = self.options.context_range.clamp(self.gap_before(fragment));
                self.skip_shared(self.gap_before(fragment) - leading);
                self.append_shared(leading);
            }

            self.append_fragment(fragment);
        }

        let trailing = self.options.context_range.clamp(self.remaining_shared());
        self.append_shared(trailing);

        Ok(self.finish())
    }

    // TODO: connecting when either side is close enough can over-merge
    // when one side's edit is much larger than the other's; needs a
    // per-side rule.
    fn is_connected_to_last(&self, fragment: &LineFragment) -> bool {
        let Some(k) = self.options.context_range.lines() else {
            return true;
        };
        // Before the first fragment only the leading context counts.
        let reach = if self.started { 2 * k } else { k };
        Side::ALL
            .iter()
            .any(|&side| self.processed[side.index()] + reach >= fragment.start_line(side))
    }

    /// Unchanged lines between the last processed line and `fragment`.
    fn gap_before(&self, fragment: &LineFragment) -> usize {
        Side::ALL
            .iter()
            .map(|&side| fragment.start_line(side).saturating_sub(self.processed[side.index()]))
            .min()
            .unwrap_or(0)
    }

    /// Unchanged lines left after the last processed line.
    fn remaining_shared(&self) -> usize {
        Side::ALL
            .iter()
            .map(|&side| self.line_count_of(side).saturating_sub(self.processed[side.index()]))
            .min()
            .unwrap_or(0)
    }

    fn line_count_of(&self, side: Side) -> usize {
        self.documents[side.index()].map_or(0, |doc| doc.line_count())
    }

    /// The document that supplies shared lines: the master side when present.
    fn shared_source(&self) -> Option<(Side, &'a D)> {
        let master = self.options.master_side;
        self.documents[master.index()]
            .map(|doc| (master, doc))
            .or_else(|| self.documents[master.other().index()].map(|doc| (master.other(), doc)))
    }

    fn skip_shared(&mut self, count: usize) {
        for processed in &mut self.processed {
            *processed += count;
        }
    }

    /// Copy `count` unchanged lines, registering them for both sides.
    fn append_shared(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let Some((source_side, doc)) = self.shared_source() else {
            return;
        };
        let combined_start = self.line_count;
        for side in Side::ALL {
            let start = self.processed[side.index()];
            self.convertor.put(side, start, start + count, combined_start);
        }
        let start = self.processed[source_side.index()];
        self.append_lines(source_side, doc, LineRange::new(start, start + count));
        self.skip_shared(count);
    }

    fn append_separator(&mut self) {
        self.terminate_last_line();
        self.separator_lines.push(self.line_count);
        self.text.push('\n');
        self.line_count += 1;
    }

    fn append_fragment(&mut self, fragment: &LineFragment) {
        let line_start = self.line_count;
        let range1 = self.append_side(Side::Left, fragment.lines(Side::Left));
        let range2 = self.append_side(Side::Right, fragment.lines(Side::Right));

        let inner_fragments = if self.options.inline_highlight {
            fragment.inner_fragments.clone()
        } else {
            None
        };
        self.blocks.push(ChangedBlock {
            range1,
            range2,
            line_start,
            line_end: self.line_count,
            inner_fragments,
        });

        self.processed = [fragment.end_line1, fragment.end_line2];
        self.started = true;
    }

    /// Copy one side of a fragment body, returning its combined byte span.
    fn append_side(&mut self, side: Side, lines: LineRange) -> Range<usize> {
        let offset = self.text.len();
        if lines.is_empty() {
            return offset..offset;
        }
        let Some(doc) = self.documents[side.index()] else {
            return offset..offset;
        };
        self.convertor.put(side, lines.start, lines.end, self.line_count);
        self.append_lines(side, doc, lines)
    }

    fn append_lines(&mut self, side: Side, doc: &D, lines: LineRange) -> Range<usize> {
        self.terminate_last_line();
        let original = doc.lines_span(lines.start, lines.end);
        let combined_start = self.text.len();
        self.text.push_str(&doc.text()[original.clone()]);
        self.pending_newline = !self.text.ends_with('\n');
        self.line_count += lines.len();

        let combined = combined_start..self.text.len();
        self.highlight_ranges.push(HighlightRange {
            side,
            combined: combined.clone(),
            original,
        });
        combined
    }

    fn terminate_last_line(&mut self) {
        if std::mem::take(&mut self.pending_newline) {
            self.text.push('\n');
        }
    }

    fn finish_equal(mut self) -> CombinedDiff {
        if let Some((source_side, doc)) = self.shared_source() {
            self.text = doc.text().to_string();
            self.line_count = doc.line_count();
            for side in Side::ALL {
                let lines = self.line_count_of(side).min(self.line_count);
                self.convertor.put(side, 0, lines, 0);
            }
            if !self.text.is_empty() {
                self.highlight_ranges.push(HighlightRange {
                    side: source_side,
                    combined: 0..self.text.len(),
                    original: 0..self.text.len(),
                });
            }
        }
        debug!(lines = self.line_count, "contents are equal");
        self.into_combined(true)
    }

    fn finish(self) -> CombinedDiff {
        debug!(
            fragments = self.fragments.len(),
            lines = self.line_count,
            blocks = self.blocks.len(),
            separators = self.separator_lines.len(),
            context = %self.options.context_range,
            "built combined view"
        );
        self.into_combined(false)
    }

    fn into_combined(self, is_equal: bool) -> CombinedDiff {
        CombinedDiff {
            convertor: self.convertor.build(),
            inverted_convertor: self.convertor.build_inverted(),
            text: self.text,
            line_count: self.line_count,
            blocks: self.blocks,
            highlight_ranges: self.highlight_ranges,
            separator_lines: self.separator_lines,
            is_equal,
            master_side: self.options.master_side,
        }
    }
}
