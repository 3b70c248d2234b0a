//! Guards against stale aggregation results: when the visible id list changes
//! while a rating pass is in flight, only the pass started for the current
//! list may commit.

use crate::study_space::SpaceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassTicket {
    generation: u64,
    input: Vec<SpaceId>,
}

impl PassTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn input(&self) -> &[SpaceId] {
        &self.input
    }
}

#[derive(Debug, Clone, Default)]
pub struct PassTracker {
    next_generation: u64,
    current: Option<PassTicket>,
}

impl PassTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `ids` as the current input and returns the ticket of the pass
    /// that will aggregate it.
    pub fn begin(&mut self, ids: &[SpaceId]) -> PassTicket {
        self.next_generation += 1;
        let ticket = PassTicket { generation: self.next_generation, input: ids.to_vec() };
        self.current = Some(ticket.clone());
        ticket
    }

    /// A finished pass may commit only if it was computed for the current input.
    pub fn accepts(&self, ticket: &PassTicket) -> bool {
        let accepted = self.current.as_ref().is_some_and(|current| current.input == ticket.input);
        if !accepted {
            tracing::debug!("discarding stale aggregation pass {}", ticket.generation);
        }
        accepted
    }

    pub fn current_input(&self) -> Option<&[SpaceId]> {
        self.current.as_ref().map(|t| t.input.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<SpaceId> {
        raw.iter().copied().map(SpaceId).collect()
    }

    #[test]
    fn latest_pass_commits() {
        let mut tracker = PassTracker::new();
        let ticket = tracker.begin(&ids(&[1, 2]));
        assert!(tracker.accepts(&ticket));
        assert_eq!(tracker.current_input(), Some(ids(&[1, 2]).as_slice()));
    }

    #[test]
    fn superseded_pass_is_discarded() {
        let mut tracker = PassTracker::new();
        let first = tracker.begin(&ids(&[1, 2, 3]));
        let second = tracker.begin(&ids(&[2]));
        assert!(!tracker.accepts(&first));
        assert!(tracker.accepts(&second));
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn pass_for_identical_input_still_commits() {
        let mut tracker = PassTracker::new();
        let first = tracker.begin(&ids(&[4, 5]));
        let _second = tracker.begin(&ids(&[4, 5]));
        assert!(tracker.accepts(&first));
    }

    #[test]
    fn nothing_commits_before_begin() {
        let mut other = PassTracker::new();
        let ticket = other.begin(&ids(&[1]));
        assert!(!PassTracker::new().accepts(&ticket));
    }
}
