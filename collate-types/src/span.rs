//! Closed validity intervals and their intersection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A closed time interval `[start..=end]` during which a metadata record is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start instant.
    pub start: DateTime<Utc>,
    /// Inclusive end instant.
    pub end: DateTime<Utc>,
}

impl Span {
    /// Construct a span from its bounds.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// True if the two spans share at least one instant.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Intersect this span with every span in `others`.
    ///
    /// The running intersection is narrowed one span at a time; as soon as a
    /// span does not overlap it, the whole extent is empty and `None` is
    /// returned. An empty `others` yields the receiver unchanged.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use collate_types::Span;
    ///
    /// let y = |y| Utc.with_ymd_and_hms(y, 1, 1, 0, 0, 0).unwrap();
    /// let a = Span::new(y(2000), y(2010));
    /// let b = Span::new(y(2001), y(2009));
    /// assert_eq!(a.extent(&[b]), Some(Span::new(y(2001), y(2009))));
    /// assert_eq!(a.extent(&[Span::new(y(1990), y(1995))]), None);
    /// ```
    #[must_use]
    pub fn extent(&self, others: &[Self]) -> Option<Self> {
        let mut span = *self;
        for other in others {
            if !span.overlaps(other) {
                return None;
            }
            if other.start > span.start {
                span.start = other.start;
            }
            if other.end < span.end {
                span.end = other.end;
            }
        }
        Some(span)
    }
}

/// Uniform access to the validity span of a metadata record.
pub trait Spanned {
    /// The record's validity span.
    fn span(&self) -> &Span;
}

impl Spanned for Span {
    fn span(&self) -> &Span {
        self
    }
}
