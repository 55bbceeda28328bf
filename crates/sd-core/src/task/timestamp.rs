use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A `create_ts` value as the server sends it.
///
/// The Go backend renders `time.Time` as RFC 3339 text; older payloads and
/// fixtures carry plain numbers. Both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Epoch(i64),
    Text(String),
}

impl Timestamp {
    pub fn parsed(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Timestamp::Epoch(_) => None,
            Timestamp::Text(text) => DateTime::parse_from_rfc3339(text).ok(),
        }
    }

    /// Total order used for sorting.
    ///
    /// Every value falls in one rank: numbers, then RFC 3339 text, then
    /// unparseable text. Numbers compare numerically, RFC 3339 text by
    /// instant, unparseable text by string.
    pub fn compare(&self, other: &Timestamp) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    fn sort_key(&self) -> SortKey<'_> {
        match self {
            Timestamp::Epoch(n) => SortKey::Epoch(*n),
            Timestamp::Text(text) => match self.parsed() {
                Some(instant) => SortKey::Instant(instant),
                None => SortKey::Unparsed(text),
            },
        }
    }
}

/// Variant order is the rank order.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum SortKey<'a> {
    Epoch(i64),
    Instant(DateTime<FixedOffset>),
    Unparsed(&'a str),
}
