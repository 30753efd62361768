//! Single-step adjustment applied to an attribute score or a skill's points.

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One unit up or down. Sheets only ever move one point at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delta {
    Increment,
    Decrement,
}

impl Delta {
    /// Signed value of this step (`+1` or `-1`).
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }

    /// Apply this step to a value. `None` when the result does not fit in an `i32`.
    pub fn apply(self, value: i32) -> Option<i32> {
        value.checked_add(self.as_i32())
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increment => write!(f, "+1"),
            Self::Decrement => write!(f, "-1"),
        }
    }
}

impl FromStr for Delta {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" | "+1" => Ok(Self::Increment),
            "-" | "-1" => Ok(Self::Decrement),
            other => Err(DomainError::parse(format!("Unknown adjustment: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_apply() {
        assert_eq!(Delta::Increment.apply(10), Some(11));
        assert_eq!(Delta::Decrement.apply(0), Some(-1));
        assert_eq!(Delta::Increment.apply(i32::MAX), None);
        assert_eq!(Delta::Decrement.apply(i32::MIN), None);
    }

    #[test]
    fn test_delta_from_str() {
        assert_eq!("+".parse::<Delta>(), Ok(Delta::Increment));
        assert_eq!("-1".parse::<Delta>(), Ok(Delta::Decrement));
        assert!(matches!("+2".parse::<Delta>(), Err(DomainError::Parse(_))));
    }
}
