use std::collections::{HashSet, VecDeque};

use crate::solver::graph::VariableId;

/// A directed arc `(target, support)`: revise the target variable's domain
/// against the support variable's domain.
pub type Arc = (VariableId, VariableId);

/// FIFO worklist of arcs pending re-examination during arc-consistency
/// propagation.
///
/// Pending arcs are deduplicated: pushing an arc that is already queued is a
/// no-op. Together with the fact that domains only ever shrink, this bounds
/// the propagation loop even though a shrunk variable re-enqueues all of its
/// neighbour arcs, including the one that triggered the shrink.
pub struct WorkList {
    queue: VecDeque<Arc>,
    pending: HashSet<Arc>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            pending: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, target: VariableId, support: VariableId) {
        if self.pending.insert((target, support)) {
            self.queue.push_back((target, support));
        }
    }

    pub fn pop_front(&mut self) -> Option<Arc> {
        let arc = self.queue.pop_front()?;
        self.pending.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_pending_arcs() {
        let mut worklist = WorkList::new();
        worklist.push_back(0, 1);
        worklist.push_back(0, 1);
        worklist.push_back(1, 0);
        assert_eq!(worklist.pop_front(), Some((0, 1)));
        assert_eq!(worklist.pop_front(), Some((1, 0)));
        assert_eq!(worklist.pop_front(), None);
    }

    #[test]
    fn popped_arcs_may_be_requeued() {
        let mut worklist = WorkList::new();
        worklist.push_back(0, 1);
        assert_eq!(worklist.pop_front(), Some((0, 1)));
        worklist.push_back(0, 1);
        assert_eq!(worklist.pop_front(), Some((0, 1)));
        assert!(worklist.is_empty());
    }
}
