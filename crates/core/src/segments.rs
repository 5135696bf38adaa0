//! Customer Segments
//!
//! A segment is an opaque cohort code (e.g. `"p1"`) assigned to a user by an external
//! segmentation system. Offers target a [`SegmentSet`]; users resolve to at most one
//! [`Segment`] through a [`SegmentResolver`].

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

mod resolver;

pub use resolver::{SegmentResolver, StaticSegmentResolver};

/// An opaque customer cohort code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Segment(String);

impl Segment {
    /// Create a segment from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The segment code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Segment {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Segment {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Borrow<str> for Segment {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The set of segments an offer targets.
///
/// Kept sorted and de-duplicated; most offers target one or two segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct SegmentSet {
    segments: SmallVec<[Segment; 2]>,
}

impl SegmentSet {
    /// Create a segment set, dropping duplicates.
    pub fn new(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut segments: SmallVec<[Segment; 2]> = segments.into_iter().collect();

        segments.sort();
        segments.dedup();

        Self { segments }
    }

    /// Create a segment set from string slices.
    pub fn from_strs(codes: &[&str]) -> Self {
        Self::new(codes.iter().copied().map(Segment::from))
    }

    /// Check whether `segment` is targeted.
    pub fn contains(&self, segment: &Segment) -> bool {
        self.contains_code(segment.as_str())
    }

    /// Check whether the segment with `code` is targeted.
    pub fn contains_code(&self, code: &str) -> bool {
        self.segments
            .binary_search_by(|probe| probe.as_str().cmp(code))
            .is_ok()
    }

    /// Whether no segment is targeted. An empty set never matches.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of targeted segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Iterate the targeted segments in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}

impl FromIterator<Segment> for SegmentSet {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<Segment>> for SegmentSet {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

impl From<SegmentSet> for Vec<Segment> {
    fn from(set: SegmentSet) -> Self {
        set.segments.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_set_sorts_and_dedups() {
        let set = SegmentSet::from_strs(&["p3", "p1", "p3"]);

        let codes: Vec<&str> = set.iter().map(Segment::as_str).collect();

        assert_eq!(codes, vec!["p1", "p3"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn segment_set_contains() {
        let set = SegmentSet::from_strs(&["p1", "p2"]);

        assert!(set.contains(&Segment::from("p2")));
        assert!(!set.contains(&Segment::from("p3")));
        assert!(!set.contains_code("P1"), "codes are case sensitive");
    }

    #[test]
    fn empty_segment_set_contains_nothing() {
        let set = SegmentSet::default();

        assert!(set.is_empty());
        assert!(!set.contains_code(""));
    }
}
