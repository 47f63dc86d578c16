//! Line translation between the combined view and the two documents.
//!
//! These functions are stateless: they take the currently published
//! [`CombinedDiff`] (or `None` before the first rediff) and the caller's
//! master side preference.

use oneside_fragment::CombinedDiff;
use oneside_types::Side;

/// A combined line translated back to one document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub side: Side,
    pub line: usize,
    /// `false` when the line was found by probing a neighbour or by the
    /// approximate fallback rather than by an exact lookup.
    pub exact: bool,
}

/// Combined line showing `line` of `side`.
///
/// Identity when no diff has been computed. Lines the combined view does not
/// show translate to `0`.
pub fn to_combined(diff: Option<&CombinedDiff>, side: Side, line: usize) -> usize {
    match diff {
        Some(diff) => diff.inverted_convertor.get(side, line),
        None => line,
    }
}

/// Document line shown at combined `line` on `side`, exact matches only.
pub fn from_combined_strict(diff: Option<&CombinedDiff>, side: Side, line: usize) -> Option<usize> {
    diff?.convertor.get(side, line)
}

/// Document position shown at combined `line`.
///
/// Prefers the side that actually holds the line; when both do, the master
/// side wins. Lines owned by neither side (separators) are resolved through
/// the line above, then the line below, and finally the master side's
/// approximate mapping.
pub fn from_combined(diff: Option<&CombinedDiff>, master_side: Side, line: usize) -> Transfer {
    let Some(diff) = diff else {
        return Transfer {
            side: master_side,
            line,
            exact: true,
        };
    };

    if let Some((side, original)) = lookup(diff, master_side, line) {
        return Transfer {
            side,
            line: original,
            exact: true,
        };
    }
    if let Some((side, original)) = line.checked_sub(1).and_then(|above| lookup(diff, master_side, above)) {
        return Transfer {
            side,
            line: original + 1,
            exact: false,
        };
    }
    if let Some((side, original)) = line.checked_add(1).and_then(|below| lookup(diff, master_side, below)) {
        return Transfer {
            side,
            line: original.saturating_sub(1),
            exact: false,
        };
    }
    Transfer {
        side: master_side,
        line: diff.convertor.convert_approximate(master_side, line),
        exact: false,
    }
}

fn lookup(diff: &CombinedDiff, master_side: Side, line: usize) -> Option<(Side, usize)> {
    let left = diff.convertor.get(Side::Left, line);
    let right = diff.convertor.get(Side::Right, line);
    match (left, right) {
        (Some(left), Some(right)) => Some((master_side, master_side.select(left, right))),
        (Some(left), None) => Some((Side::Left, left)),
        (None, Some(right)) => Some((Side::Right, right)),
        (None, None) => None,
    }
}
