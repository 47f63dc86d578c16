use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// How many unchanged lines to keep around each change.
///
/// Serialized as an integer: `-1` means [`ContextRange::Unlimited`], any
/// non-negative value is a line count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ContextRange {
    /// Never elide unchanged lines.
    Unlimited,
    /// Keep at most this many unchanged lines on each side of a change.
    Lines(usize),
}

impl ContextRange {
    /// The line count, or `None` when unlimited.
    pub fn lines(self) -> Option<usize> {
        match self {
            ContextRange::Unlimited => None,
            ContextRange::Lines(k) => Some(k),
        }
    }

    /// Clamp an available run of unchanged lines to this context.
    pub fn clamp(self, available: usize) -> usize {
        match self {
            ContextRange::Unlimited => available,
            ContextRange::Lines(k) => k.min(available),
        }
    }
}

impl Default for ContextRange {
    fn default() -> Self {
        ContextRange::Lines(4)
    }
}

impl TryFrom<i64> for ContextRange {
    type Error = TypeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(ContextRange::Unlimited),
            v if v >= 0 => usize::try_from(v)
                .map(ContextRange::Lines)
                .map_err(|_| TypeError::InvalidContextRange(v)),
            v => Err(TypeError::InvalidContextRange(v)),
        }
    }
}

impl From<ContextRange> for i64 {
    fn from(range: ContextRange) -> Self {
        match range {
            ContextRange::Unlimited => -1,
            ContextRange::Lines(k) => i64::try_from(k).unwrap_or(i64::MAX),
        }
    }
}

impl fmt::Display for ContextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextRange::Unlimited => f.write_str("unlimited"),
            ContextRange::Lines(k) => write!(f, "{k} lines"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_forms() {
        assert_eq!(ContextRange::try_from(-1).unwrap(), ContextRange::Unlimited);
        assert_eq!(ContextRange::try_from(3).unwrap(), ContextRange::Lines(3));
        assert_eq!(
            ContextRange::try_from(-2),
            Err(TypeError::InvalidContextRange(-2))
        );
        assert_eq!(i64::from(ContextRange::Unlimited), -1);
        assert_eq!(i64::from(ContextRange::Lines(0)), 0);
    }

    #[test]
    fn clamp_respects_limit() {
        assert_eq!(ContextRange::Lines(2).clamp(10), 2);
        assert_eq!(ContextRange::Lines(5).clamp(3), 3);
        assert_eq!(ContextRange::Unlimited.clamp(10), 10);
    }

    #[test]
    fn serde_as_integer() {
        let json = serde_json::to_string(&ContextRange::Unlimited).unwrap();
        assert_eq!(json, "-1");
        let parsed: ContextRange = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, ContextRange::Lines(7));
        assert!(serde_json::from_str::<ContextRange>("-5").is_err());
    }
}
