//! Forward and inverted convertors and the builder that produces them.

use oneside_types::Side;

use crate::interval::IntervalMap;

/// Incrementally records which combined lines came from which original lines.
///
/// Fed one [`put`](ConvertorBuilder::put) per appended run, then finalized
/// with [`build`](ConvertorBuilder::build) and
/// [`build_inverted`](ConvertorBuilder::build_inverted).
#[derive(Clone, Debug, Default)]
pub struct ConvertorBuilder {
    /// Combined line -> original line, indexed by [`Side::index`].
    forward: [IntervalMap; 2],
    /// Original line -> combined line.
    inverted: [IntervalMap; 2],
}

impl ConvertorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register that combined lines starting at `combined_start` hold original
    /// lines `original_start..original_end` of `side`.
    pub fn put(&mut self, side: Side, original_start: usize, original_end: usize, combined_start: usize) {
        let len = original_end.saturating_sub(original_start);
        self.forward[side.index()].put(combined_start, original_start, len);
        self.inverted[side.index()].put(original_start, combined_start, len);
    }

    pub fn build(&self) -> LineNumberConvertor {
        LineNumberConvertor {
            maps: self.forward.clone(),
        }
    }

    pub fn build_inverted(&self) -> InvertedLineNumberConvertor {
        InvertedLineNumberConvertor {
            maps: self.inverted.clone(),
        }
    }
}

/// Combined view line -> original document line, per side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineNumberConvertor {
    maps: [IntervalMap; 2],
}

impl LineNumberConvertor {
    /// Identity on the left side over `lines` lines; the right side is unmapped.
    pub fn create_left(lines: usize) -> Self {
        Self::create_single(Side::Left, lines)
    }

    /// Identity on the right side over `lines` lines; the left side is unmapped.
    pub fn create_right(lines: usize) -> Self {
        Self::create_single(Side::Right, lines)
    }

    fn create_single(side: Side, lines: usize) -> Self {
        let mut builder = ConvertorBuilder::new();
        builder.put(side, 0, lines, 0);
        builder.build()
    }

    /// The original line on `side` shown at combined `line`, or `None` when
    /// that combined line does not come from `side`.
    pub fn get(&self, side: Side, line: usize) -> Option<usize> {
        self.maps[side.index()].get(line)
    }

    /// Like [`get`](Self::get), but falls back to the original line just past
    /// the closest preceding mapped run, or `0` when none precedes.
    pub fn convert_approximate(&self, side: Side, line: usize) -> usize {
        self.maps[side.index()].get_approximate(line)
    }

    /// Returns `true` if nothing was registered for `side`.
    pub fn is_empty(&self, side: Side) -> bool {
        self.maps[side.index()].is_empty()
    }
}

/// Original document line -> combined view line, per side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvertedLineNumberConvertor {
    maps: [IntervalMap; 2],
}

impl InvertedLineNumberConvertor {
    /// The combined line showing original `line` of `side`.
    ///
    /// Unmapped lines yield `0`, not a miss: consumers treat the result as a
    /// scroll target and land on the top of the view.
    pub fn get(&self, side: Side, line: usize) -> usize {
        self.maps[side.index()].get(line).unwrap_or(0)
    }

    /// The combined line showing original `line`, or `None` when unmapped.
    pub fn get_exact(&self, side: Side, line: usize) -> Option<usize> {
        self.maps[side.index()].get(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Combined view of `a b x c`: shared `a`, left `b`, right `x`, shared `c`.
    fn replace_one_line() -> ConvertorBuilder {
        let mut builder = ConvertorBuilder::new();
        builder.put(Side::Left, 0, 1, 0);
        builder.put(Side::Right, 0, 1, 0);
        builder.put(Side::Left, 1, 2, 1);
        builder.put(Side::Right, 1, 2, 2);
        builder.put(Side::Left, 2, 3, 3);
        builder.put(Side::Right, 2, 3, 3);
        builder
    }

    #[test]
    fn forward_lookup() {
        let convertor = replace_one_line().build();
        assert_eq!(convertor.get(Side::Left, 0), Some(0));
        assert_eq!(convertor.get(Side::Left, 1), Some(1));
        assert_eq!(convertor.get(Side::Left, 2), None);
        assert_eq!(convertor.get(Side::Left, 3), Some(2));
        assert_eq!(convertor.get(Side::Right, 1), None);
        assert_eq!(convertor.get(Side::Right, 2), Some(1));
        assert_eq!(convertor.get(Side::Right, 4), None);
    }

    #[test]
    fn inverted_lookup() {
        let inverted = replace_one_line().build_inverted();
        assert_eq!(inverted.get(Side::Left, 1), 1);
        assert_eq!(inverted.get(Side::Right, 1), 2);
        assert_eq!(inverted.get(Side::Right, 2), 3);
    }

    #[test]
    fn unmapped_forward_is_none_but_inverted_is_zero() {
        let mut builder = ConvertorBuilder::new();
        builder.put(Side::Left, 5, 7, 3);
        let forward = builder.build();
        let inverted = builder.build_inverted();

        assert_eq!(forward.get(Side::Left, 0), None);
        assert_eq!(forward.get(Side::Left, 9), None);
        assert_eq!(inverted.get(Side::Left, 0), 0);
        assert_eq!(inverted.get(Side::Left, 9), 0);
        assert_eq!(inverted.get_exact(Side::Left, 9), None);
        assert_eq!(inverted.get(Side::Right, 5), 0);
    }

    #[test]
    fn single_side_identity() {
        let left = LineNumberConvertor::create_left(4);
        for line in 0..4 {
            assert_eq!(left.get(Side::Left, line), Some(line));
            assert_eq!(left.get(Side::Right, line), None);
        }
        assert_eq!(left.get(Side::Left, 4), None);
        assert!(left.is_empty(Side::Right));

        let right = LineNumberConvertor::create_right(2);
        assert_eq!(right.get(Side::Right, 1), Some(1));
        assert_eq!(right.get(Side::Left, 1), None);
    }

    #[test]
    fn approximate_falls_back_to_previous_run() {
        let convertor = replace_one_line().build();
        assert_eq!(convertor.convert_approximate(Side::Left, 2), 2);
        assert_eq!(convertor.convert_approximate(Side::Right, 1), 1);
        assert_eq!(convertor.convert_approximate(Side::Right, 10), 3);
    }

    proptest! {
        /// Runs laid out back to back round-trip through both directions.
        #[test]
        fn forward_and_inverted_agree(runs in prop::collection::vec((0usize..2, 1usize..6, 0usize..4), 1..12)) {
            let mut builder = ConvertorBuilder::new();
            let mut combined = 0;
            let mut original = [0usize; 2];
            let mut expected = Vec::new();
            for (side_idx, len, skip) in runs {
                let side = if side_idx == 0 { Side::Left } else { Side::Right };
                let start = original[side.index()] + skip;
                builder.put(side, start, start + len, combined);
                for i in 0..len {
                    expected.push((combined + i, side, start + i));
                }
                original[side.index()] = start + len;
                combined += len;
            }

            let forward = builder.build();
            let inverted = builder.build_inverted();
            for (line, side, original_line) in expected {
                prop_assert_eq!(forward.get(side, line), Some(original_line));
                prop_assert_eq!(forward.get(side.other(), line), None);
                prop_assert_eq!(inverted.get(side, original_line), line);
            }
        }
    }
}
