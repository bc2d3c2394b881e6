//! Request bookkeeping for the view.
//!
//! List-region requests (page loads and searches) carry a monotonically
//! increasing [`RequestToken`]; only the response to the latest token may
//! touch the view. Mutations are keyed by [`MutationKey`] so that a control
//! stays disabled while its request is in flight.

use std::collections::HashSet;

/// Identifier of one list-region request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Returns the raw token value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Key identifying a mutation whose control is disabled while in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKey {
    /// Form submission (create or update).
    Save,
    /// Deletion of the review with this id.
    Delete(u64),
}

/// Tracks the latest list token and in-flight mutations.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest_list: u64,
    list_pending: bool,
    in_flight: HashSet<MutationKey>,
}

impl RequestTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the token for a new list-region request.
    ///
    /// Every previously issued token becomes stale.
    pub const fn issue_list_token(&mut self) -> RequestToken {
        self.latest_list = self.latest_list.saturating_add(1);
        self.list_pending = true;
        RequestToken(self.latest_list)
    }

    /// Returns the most recently issued list token, if any.
    #[must_use]
    pub const fn latest_list_token(&self) -> Option<RequestToken> {
        if self.latest_list == 0 {
            None
        } else {
            Some(RequestToken(self.latest_list))
        }
    }

    /// Accepts the response for `token` if it is the latest one.
    ///
    /// Returns `false` for stale tokens, leaving the pending flag untouched.
    pub const fn accept_list_response(&mut self, token: RequestToken) -> bool {
        if token.0 != self.latest_list {
            return false;
        }
        self.list_pending = false;
        true
    }

    /// Returns true while the latest list request has not answered.
    #[must_use]
    pub const fn is_list_pending(&self) -> bool {
        self.list_pending
    }

    /// Marks `key` as in flight.
    ///
    /// Returns `false` without changing anything when `key` is already in
    /// flight, in which case the caller must not issue the request.
    pub fn try_begin(&mut self, key: MutationKey) -> bool {
        self.in_flight.insert(key)
    }

    /// Releases `key` after its request completed or failed.
    pub fn finish(&mut self, key: MutationKey) {
        self.in_flight.remove(&key);
    }

    /// Returns true while `key` is in flight.
    #[must_use]
    pub fn is_in_flight(&self, key: MutationKey) -> bool {
        self.in_flight.contains(&key)
    }

    /// Returns the ids of reviews with a deletion in flight, sorted.
    #[must_use]
    pub fn deleting_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .in_flight
            .iter()
            .filter_map(|key| match key {
                MutationKey::Delete(id) => Some(*id),
                MutationKey::Save => None,
            })
            .collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::{MutationKey, RequestTracker};

    #[test]
    fn tokens_increase_monotonically() {
        let mut tracker = RequestTracker::new();

        let first = tracker.issue_list_token();
        let second = tracker.issue_list_token();

        assert!(second > first);
        assert_eq!(tracker.latest_list_token(), Some(second));
    }

    #[test]
    fn only_latest_token_is_accepted() {
        let mut tracker = RequestTracker::new();
        let stale = tracker.issue_list_token();
        let latest = tracker.issue_list_token();

        assert!(!tracker.accept_list_response(stale));
        assert!(tracker.is_list_pending());
        assert!(tracker.accept_list_response(latest));
        assert!(!tracker.is_list_pending());
    }

    #[test]
    fn mutation_key_blocks_until_finished() {
        let mut tracker = RequestTracker::new();

        assert!(tracker.try_begin(MutationKey::Save));
        assert!(!tracker.try_begin(MutationKey::Save));
        tracker.finish(MutationKey::Save);
        assert!(tracker.try_begin(MutationKey::Save));
    }

    #[test]
    fn deletes_are_keyed_per_review() {
        let mut tracker = RequestTracker::new();

        assert!(tracker.try_begin(MutationKey::Delete(3)));
        assert!(tracker.try_begin(MutationKey::Delete(1)));
        assert!(!tracker.try_begin(MutationKey::Delete(3)));
        assert_eq!(tracker.deleting_ids(), vec![1, 3]);
    }

    #[test]
    fn fresh_tracker_has_no_token() {
        assert_eq!(RequestTracker::new().latest_list_token(), None);
    }
}
