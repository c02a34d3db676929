//! Typed record identifier.
//!
//! Unlike UUID-keyed systems, record ids are small sequential integers
//! assigned by the data-access layer as `max(existing ids) + 1`. The
//! newtype keeps them from being confused with counts or prices.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Record`](crate::record::Record).
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wrap a raw integer id.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Access the inner integer.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// The id following this one. `RecordId::default().next()` is the
    /// first id assigned to an empty collection.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_at_one_when_advancing_from_default() {
        assert_eq!(RecordId::default().next(), RecordId::new(1));
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = RecordId::new(42);
        let text = id.to_string();
        let parsed: RecordId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&RecordId::new(7)).unwrap();
        assert_eq!(json, "7");
        let parsed: RecordId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, RecordId::new(7));
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_id() {
        let result = RecordId::from_str("not-a-number");
        assert!(result.is_err());
    }
}
