//! Incremental extension of an under-filled match history.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CacheKey, CachedProfile, MatchRecord, PlayerIdentity, QueueFilter};
use crate::domain::ports::MatchSource;

/// Decides how many additional matches to fetch and merges them into the
/// stored record.
///
/// Exactly one batch per extension, sized to `batch_size`, starting at an
/// offset equal to the number of matches already stored. The planner never
/// loops to satisfy the requested count: an under-filled result after one
/// batch is valid output, not an error.
pub struct BackfillPlanner<S: MatchSource> {
    source: Arc<S>,
    batch_size: usize,
}

impl<S: MatchSource> BackfillPlanner<S> {
    pub fn new(source: Arc<S>, batch_size: usize) -> Self {
        Self { source, batch_size }
    }

    /// Extend `profile` toward `requested_count` matches.
    ///
    /// Returns the input unchanged, with no upstream call, when it already
    /// holds enough matches. Otherwise appends one deduplicated batch to the
    /// end of the sequence; the existing head stays the most recent match,
    /// so most-recent-first ordering is preserved.
    pub async fn extend(
        &self,
        key: &CacheKey,
        identity: &PlayerIdentity,
        mut profile: CachedProfile,
        requested_count: usize,
    ) -> DomainResult<CachedProfile> {
        let stored = profile.games.len();
        if stored >= requested_count {
            return Ok(profile);
        }

        debug!(
            key = %key,
            stored = stored,
            requested = requested_count,
            batch = self.batch_size,
            "backfilling match history"
        );

        // Older matches continue the sequence, so they always use the
        // unfiltered history regardless of how the profile was fetched.
        let batch = self
            .source
            .fetch_match_batch(
                &identity.puuid,
                key.server(),
                self.batch_size,
                stored,
                QueueFilter::All,
            )
            .await?;

        let appended = append_unique(&mut profile.games, batch);
        debug!(key = %key, appended = appended, total = profile.games.len(), "backfill merged");
        Ok(profile)
    }
}

/// Append `batch` to `games`, dropping any entry whose match id is already
/// present. Offsets and upstream ordering can disagree when new matches are
/// played between requests, so this check is load-bearing, not defensive.
///
/// Returns the number of records actually appended.
pub(crate) fn append_unique(games: &mut Vec<MatchRecord>, batch: Vec<MatchRecord>) -> usize {
    let mut seen: HashSet<String> = games.iter().map(|g| g.match_id.clone()).collect();
    let mut appended = 0;
    for record in batch {
        if seen.insert(record.match_id.clone()) {
            games.push(record);
            appended += 1;
        }
    }
    appended
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn records(ids: &[&str]) -> Vec<MatchRecord> {
        ids.iter().copied().map(MatchRecord::new).collect()
    }

    #[test]
    fn appends_new_matches_at_the_end() {
        let mut games = records(&["m3", "m2"]);
        let appended = append_unique(&mut games, records(&["m1", "m0"]));
        assert_eq!(appended, 2);
        let ids: Vec<_> = games.iter().map(|g| g.match_id.as_str()).collect();
        assert_eq!(ids, vec!["m3", "m2", "m1", "m0"]);
    }

    #[test]
    fn drops_matches_already_stored() {
        let mut games = records(&["m3", "m2"]);
        let appended = append_unique(&mut games, records(&["m2", "m1"]));
        assert_eq!(appended, 1);
        let ids: Vec<_> = games.iter().map(|g| g.match_id.as_str()).collect();
        assert_eq!(ids, vec!["m3", "m2", "m1"]);
    }

    #[test]
    fn drops_duplicates_within_the_batch() {
        let mut games = records(&["m3"]);
        let appended = append_unique(&mut games, records(&["m1", "m1"]));
        assert_eq!(appended, 1);
        assert_eq!(games.len(), 2);
    }

    proptest! {
        /// No sequence of overlapping upstream batches can introduce a
        /// duplicate match id, and existing order is never disturbed.
        #[test]
        fn merged_history_never_contains_duplicates(
            existing in proptest::collection::vec("[a-e][0-9]", 0..20),
            batch in proptest::collection::vec("[a-e][0-9]", 0..20),
        ) {
            let mut games: Vec<MatchRecord> = Vec::new();
            append_unique(
                &mut games,
                existing.iter().cloned().map(MatchRecord::new).collect(),
            );
            let before: Vec<String> = games.iter().map(|g| g.match_id.clone()).collect();

            append_unique(
                &mut games,
                batch.iter().cloned().map(MatchRecord::new).collect(),
            );

            let ids: Vec<&str> = games.iter().map(|g| g.match_id.as_str()).collect();
            let unique: HashSet<&str> = ids.iter().copied().collect();
            prop_assert_eq!(ids.len(), unique.len());
            prop_assert_eq!(
                &games.iter().map(|g| g.match_id.clone()).collect::<Vec<_>>()[..before.len()],
                &before[..]
            );
        }
    }
}
