//! Ordered interval map with floor lookups.

use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Entry {
    /// Start of a registered interval, holding the mapped start value.
    Mapped(usize),
    /// First key past an interval, holding the value just past its end.
    Gap(usize),
}

/// Piecewise-linear map from `key` to `value`, keyed by interval start.
///
/// Every registered interval `[key, key + len)` stores its start and marks
/// its end with a gap entry, so a floor query that lands past an interval
/// reports a miss instead of extrapolating.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct IntervalMap {
    entries: BTreeMap<usize, Entry>,
}

impl IntervalMap {
    /// Map keys `key_start..key_start + len` onto `value_start..value_start + len`.
    pub(crate) fn put(&mut self, key_start: usize, value_start: usize, len: usize) {
        if len == 0 {
            return;
        }
        // A run starting where the previous one ended replaces its gap.
        self.entries.insert(key_start, Entry::Mapped(value_start));
        self.entries
            .entry(key_start + len)
            .or_insert(Entry::Gap(value_start + len));
    }

    pub(crate) fn get(&self, key: usize) -> Option<usize> {
        match self.floor(key)? {
            (start, Entry::Mapped(value)) => Some(value + (key - start)),
            (_, Entry::Gap(_)) => None,
        }
    }

    /// Exact value if mapped, else the value just past the closest interval
    /// before `key`, else `0`.
    pub(crate) fn get_approximate(&self, key: usize) -> usize {
        match self.floor(key) {
            Some((start, Entry::Mapped(value))) => value + (key - start),
            Some((_, Entry::Gap(value_end))) => value_end,
            None => 0,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn floor(&self, key: usize) -> Option<(usize, Entry)> {
        self.entries
            .range(..=key)
            .next_back()
            .map(|(&start, &entry)| (start, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_misses() {
        let map = IntervalMap::default();
        assert!(map.is_empty());
        assert_eq!(map.get(0), None);
        assert_eq!(map.get_approximate(5), 0);
    }

    #[test]
    fn lookup_inside_and_past_interval() {
        let mut map = IntervalMap::default();
        map.put(2, 10, 3);
        assert_eq!(map.get(1), None);
        assert_eq!(map.get(2), Some(10));
        assert_eq!(map.get(4), Some(12));
        assert_eq!(map.get(5), None);
        assert_eq!(map.get(100), None);
    }

    #[test]
    fn adjacent_interval_replaces_gap() {
        let mut map = IntervalMap::default();
        map.put(0, 0, 2);
        map.put(2, 7, 2);
        assert_eq!(map.get(1), Some(1));
        assert_eq!(map.get(2), Some(7));
        assert_eq!(map.get(3), Some(8));
        assert_eq!(map.get(4), None);
    }

    #[test]
    fn late_gap_does_not_clobber_start() {
        let mut map = IntervalMap::default();
        map.put(3, 30, 1);
        map.put(1, 10, 2);
        assert_eq!(map.get(2), Some(11));
        assert_eq!(map.get(3), Some(30));
    }

    #[test]
    fn zero_length_is_ignored() {
        let mut map = IntervalMap::default();
        map.put(4, 4, 0);
        assert!(map.is_empty());
    }

    #[test]
    fn approximate_uses_previous_end() {
        let mut map = IntervalMap::default();
        map.put(2, 5, 2);
        assert_eq!(map.get_approximate(0), 0);
        assert_eq!(map.get_approximate(3), 6);
        assert_eq!(map.get_approximate(9), 7);
    }
}
