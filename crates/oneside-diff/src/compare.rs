//! Line-level comparison: two documents in, ordered line fragments out.
//!
//! Uses the `similar` crate (Myers diff algorithm) over per-line keys, so
//! whitespace policies only affect which lines count as equal, never the
//! offsets reported back.

use std::borrow::Cow;

use oneside_types::{CancelFlag, LineFragment, LineSource};
use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffTag};
use tracing::{debug, warn};

use crate::error::{DiffError, DiffResult};
use crate::inner::inner_fragments;

/// How lines are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonPolicy {
    /// Lines must match exactly.
    #[default]
    Default,
    /// Leading and trailing whitespace is ignored.
    TrimWhitespaces,
    /// All whitespace is ignored.
    IgnoreWhitespaces,
}

impl ComparisonPolicy {
    fn key<'a>(self, line: &'a str) -> Cow<'a, str> {
        match self {
            ComparisonPolicy::Default => Cow::Borrowed(line),
            ComparisonPolicy::TrimWhitespaces => Cow::Borrowed(line.trim()),
            ComparisonPolicy::IgnoreWhitespaces => {
                if line.contains(char::is_whitespace) {
                    Cow::Owned(line.chars().filter(|c| !c.is_whitespace()).collect())
                } else {
                    Cow::Borrowed(line)
                }
            }
        }
    }
}

/// Options for [`compare_lines`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareOptions {
    pub policy: ComparisonPolicy,
    /// Compute character spans for replaced regions.
    pub inner_fragments: bool,
    /// Refuse inputs whose combined line count exceeds this.
    pub max_lines: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            policy: ComparisonPolicy::Default,
            inner_fragments: true,
            max_lines: 100_000,
        }
    }
}

/// Compare two documents line by line.
///
/// An absent document compares as empty. The returned fragments are sorted
/// and non-overlapping on both sides; adjacent changes are merged into one
/// fragment.
pub fn compare_lines<D: LineSource + ?Sized>(
    doc1: Option<&D>,
    doc2: Option<&D>,
    options: &CompareOptions,
    cancel: &CancelFlag,
) -> DiffResult<Vec<LineFragment>> {
    let count1 = doc1.map_or(0, |d| d.line_count());
    let count2 = doc2.map_or(0, |d| d.line_count());
    let total = count1 + count2;
    if total > options.max_lines {
        warn!(lines = total, limit = options.max_lines, "comparison refused: content too big");
        return Err(DiffError::TooBig {
            lines: total,
            limit: options.max_lines,
        });
    }
    cancel.check()?;

    let keys1 = line_keys(doc1, options.policy);
    let keys2 = line_keys(doc2, options.policy);
    let ops = capture_diff_slices(Algorithm::Myers, &keys1, &keys2);
    cancel.check()?;

    let mut fragments: Vec<LineFragment> = Vec::new();
    for op in &ops {
        if op.tag() == DiffTag::Equal {
            continue;
        }
        let (old, new) = (op.old_range(), op.new_range());
        match fragments.last_mut() {
            Some(last) if last.end_line1 == old.start && last.end_line2 == new.start => {
                last.end_line1 = old.end;
                last.end_line2 = new.end;
            }
            _ => fragments.push(LineFragment::new(old.start, old.end, new.start, new.end)),
        }
    }

    if options.inner_fragments {
        if let (Some(doc1), Some(doc2)) = (doc1, doc2) {
            for fragment in &mut fragments {
                cancel.check()?;
                if fragment.start_line1 == fragment.end_line1 || fragment.start_line2 == fragment.end_line2 {
                    continue;
                }
                let text1 = &doc1.text()[doc1.lines_span(fragment.start_line1, fragment.end_line1)];
                let text2 = &doc2.text()[doc2.lines_span(fragment.start_line2, fragment.end_line2)];
                fragment.inner_fragments = inner_fragments(text1, text2);
            }
        }
    }

    debug!(
        lines1 = count1,
        lines2 = count2,
        fragments = fragments.len(),
        policy = ?options.policy,
        "compared documents"
    );
    Ok(fragments)
}

fn line_keys<D: LineSource + ?Sized>(doc: Option<&D>, policy: ComparisonPolicy) -> Vec<Cow<'_, str>> {
    match doc {
        Some(doc) => (0..doc.line_count())
            .map(|line| policy.key(doc.line_text(line)))
            .collect(),
        None => Vec::new(),
    }
}
