//! Character-level spans inside a replaced region.

use std::iter;

use oneside_types::DiffFragment;
use similar::{DiffTag, TextDiff};

/// Regions longer than this (in bytes, either side) get no inner spans.
pub(crate) const MAX_INNER_BYTES: usize = 16 * 1024;

/// Character spans between `text1` and `text2`, as byte offsets into each.
///
/// Returns `None` when either text is too long to be worth refining.
pub(crate) fn inner_fragments(text1: &str, text2: &str) -> Option<Vec<DiffFragment>> {
    if text1.len() > MAX_INNER_BYTES || text2.len() > MAX_INNER_BYTES {
        return None;
    }

    let diff = TextDiff::from_chars(text1, text2);
    let starts1 = char_starts(text1);
    let starts2 = char_starts(text2);

    let mut fragments: Vec<DiffFragment> = Vec::new();
    for op in diff.ops() {
        if op.tag() == DiffTag::Equal {
            continue;
        }
        let (old, new) = (op.old_range(), op.new_range());
        let fragment = DiffFragment::new(starts1[old.start], starts1[old.end], starts2[new.start], starts2[new.end]);
        match fragments.last_mut() {
            Some(last)
                if last.end_offset1 == fragment.start_offset1
                    && last.end_offset2 == fragment.start_offset2 =>
            {
                last.end_offset1 = fragment.end_offset1;
                last.end_offset2 = fragment.end_offset2;
            }
            _ => fragments.push(fragment),
        }
    }
    Some(fragments)
}

/// Byte offset of every char, plus the text length.
fn char_starts(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(iter::once(text.len()))
        .collect()
}
