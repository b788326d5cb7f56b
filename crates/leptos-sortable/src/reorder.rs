//! List Reorder State Machine
//!
//! UI-free half of the sortable pattern: splice-move semantics and an
//! ephemeral drag session over an id sequence.

/// Move `active` so it lands at the index `over` currently occupies.
///
/// Splice semantics: remove then insert, never a swap. Moving an id onto
/// itself (or onto an unknown id) returns the order unchanged.
pub fn move_to(order: &[u32], active: u32, over: u32) -> Vec<u32> {
    let mut next = order.to_vec();
    let (from, to) = match (
        order.iter().position(|&id| id == active),
        order.iter().position(|&id| id == over),
    ) {
        (Some(f), Some(t)) => (f, t),
        _ => return next,
    };
    if from == to {
        return next;
    }
    let id = next.remove(from);
    next.insert(to, id);
    next
}

/// One in-flight drag over an ordered collection.
///
/// Holds the last committed order as the rollback point; `drag_over`
/// mutates only the candidate order, `finish` hands back a new order only
/// when something actually moved.
#[derive(Clone, Debug)]
pub struct SortSession {
    committed: Vec<u32>,
    current: Vec<u32>,
    active: u32,
    origin_index: usize,
}

impl SortSession {
    /// Begin a drag of `active_id`. Returns None if the id is not in the
    /// collection (stale gesture after an external reload).
    pub fn begin(order: Vec<u32>, active_id: u32) -> Option<Self> {
        let origin_index = order.iter().position(|&id| id == active_id)?;
        Some(Self {
            current: order.clone(),
            committed: order,
            active: active_id,
            origin_index,
        })
    }

    pub fn active(&self) -> u32 {
        self.active
    }

    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    /// Candidate order for rendering while the drag is in flight.
    pub fn current(&self) -> &[u32] {
        &self.current
    }

    /// Hover feedback: splice the active id to the hovered id's slot.
    pub fn drag_over(&mut self, over_id: u32) {
        self.current = move_to(&self.current, self.active, over_id);
    }

    /// Revert the candidate order to the last committed one.
    pub fn cancel(&mut self) {
        self.current = self.committed.clone();
    }

    /// Drop: the final order, or None when nothing moved (self-drop).
    pub fn finish(self) -> Option<Vec<u32>> {
        if self.current == self.committed {
            None
        } else {
            Some(self.current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_to_splices_downward() {
        assert_eq!(move_to(&[1, 2, 3, 4], 1, 3), vec![2, 3, 1, 4]);
    }

    #[test]
    fn move_to_splices_upward() {
        assert_eq!(move_to(&[1, 2, 3, 4], 4, 2), vec![1, 4, 2, 3]);
    }

    #[test]
    fn move_to_is_not_a_swap() {
        // 1 lands at 4's slot; everything between shifts by one
        assert_eq!(move_to(&[1, 2, 3, 4], 1, 4), vec![2, 3, 4, 1]);
    }

    #[test]
    fn move_onto_self_is_noop() {
        assert_eq!(move_to(&[1, 2, 3], 2, 2), vec![1, 2, 3]);
    }

    #[test]
    fn move_with_unknown_id_is_noop() {
        assert_eq!(move_to(&[1, 2, 3], 9, 2), vec![1, 2, 3]);
        assert_eq!(move_to(&[1, 2, 3], 1, 9), vec![1, 2, 3]);
    }

    #[test]
    fn session_tracks_candidate_order() {
        let mut s = SortSession::begin(vec![1, 2, 3, 4], 1).unwrap();
        assert_eq!(s.origin_index(), 0);
        s.drag_over(3);
        assert_eq!(s.current(), &[2, 3, 1, 4]);
        // Hovering back restores the original sequence
        s.drag_over(2);
        assert_eq!(s.current(), &[1, 2, 3, 4]);
    }

    #[test]
    fn session_cancel_reverts() {
        let mut s = SortSession::begin(vec![1, 2, 3], 3).unwrap();
        s.drag_over(1);
        assert_eq!(s.current(), &[3, 1, 2]);
        s.cancel();
        assert_eq!(s.current(), &[1, 2, 3]);
        assert!(s.finish().is_none());
    }

    #[test]
    fn finish_is_none_when_nothing_moved() {
        let s = SortSession::begin(vec![1, 2, 3], 2).unwrap();
        assert!(s.finish().is_none());
    }

    #[test]
    fn finish_returns_moved_order() {
        let mut s = SortSession::begin(vec![1, 2, 3], 1).unwrap();
        s.drag_over(2);
        assert_eq!(s.finish(), Some(vec![2, 1, 3]));
    }

    #[test]
    fn finish_returns_last_hovered_candidate() {
        let mut s = SortSession::begin(vec![1, 2, 3, 4], 2).unwrap();
        s.drag_over(3);
        s.drag_over(4);
        assert_eq!(s.finish(), Some(vec![1, 3, 4, 2]));
    }

    #[test]
    fn begin_with_stale_id_fails() {
        assert!(SortSession::begin(vec![1, 2, 3], 7).is_none());
    }
}
