//! Segment resolution

use std::{
    convert::Infallible,
    future::{self, Future},
    sync::Arc,
};

use rustc_hash::FxHashMap;

use crate::{ids::UserId, segments::Segment};

/// Maps a user to zero or one customer segment.
///
/// Segment computation is owned elsewhere; the engine only needs this lookup.
/// `Ok(None)` means the user belongs to no segment.
pub trait SegmentResolver: Send + Sync {
    /// Error raised when the lookup itself fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolve the segment for `user`.
    fn resolve(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<Option<Segment>, Self::Error>> + Send;
}

impl<R: SegmentResolver> SegmentResolver for Arc<R> {
    type Error = R::Error;

    fn resolve(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<Option<Segment>, Self::Error>> + Send {
        (**self).resolve(user)
    }
}

/// Fixed user to segment mapping.
#[derive(Debug, Clone, Default)]
pub struct StaticSegmentResolver {
    segments: FxHashMap<UserId, Segment>,
}

impl StaticSegmentResolver {
    /// Create an empty mapping; every user resolves to no segment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the segment for `user`.
    #[must_use]
    pub fn with(mut self, user: impl Into<UserId>, segment: impl Into<Segment>) -> Self {
        self.insert(user, segment);
        self
    }

    /// Add or replace the segment for `user`.
    pub fn insert(&mut self, user: impl Into<UserId>, segment: impl Into<Segment>) {
        self.segments.insert(user.into(), segment.into());
    }

    /// Number of mapped users.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no user is mapped.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromIterator<(UserId, Segment)> for StaticSegmentResolver {
    fn from_iter<I: IntoIterator<Item = (UserId, Segment)>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl SegmentResolver for StaticSegmentResolver {
    type Error = Infallible;

    fn resolve(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<Option<Segment>, Self::Error>> + Send {
        future::ready(Ok(self.segments.get(&user).cloned()))
    }
}
