//! Selection engine: the set of chosen course ids with propagation.
//!
//! The selection set is the single source of truth for "is included in this
//! itinerary". It is only mutated through [`propagate`], a pure reducer from
//! (current set, operation) to a new set, so the propagation invariants are
//! testable without any surrounding state:
//!
//! - selecting a course also selects every ancestor, so a tour point's
//!   containing categories are always implicitly included;
//! - deselecting a course also deselects every descendant, so removing a
//!   category removes everything under it.
//!
//! After any sequence of operations the set is upward-closed: a selected
//! node either has no parent or its parent is selected.

use std::collections::BTreeSet;

use crate::models::tree::CourseTree;

/// Ordered set of selected course ids.
pub type SelectionSet = BTreeSet<u64>;

/// A single selection mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOp {
    /// Add the id and all its ancestors
    Select(u64),
    /// Remove the id and all its descendants
    Deselect(u64),
}

/// Applies one operation to the selection, returning the new set.
///
/// Ids absent from the tree are still added/removed from the raw set, but
/// no propagation occurs beyond what the tree can resolve. Ancestor and
/// descendant walks are cycle-guarded inside [`CourseTree`].
pub fn propagate(current: &SelectionSet, op: SelectionOp, tree: &CourseTree) -> SelectionSet {
    let mut next = current.clone();
    match op {
        SelectionOp::Select(id) => {
            next.insert(id);
            for ancestor in tree.ancestor_ids(id) {
                next.insert(ancestor);
            }
        }
        SelectionOp::Deselect(id) => {
            next.remove(&id);
            for descendant in tree.descendant_ids(id) {
                next.remove(&descendant);
            }
        }
    }
    next
}

/// Checks the upward-closure invariant: every selected id has no parent or
/// a selected parent.
pub fn is_upward_closed(selection: &SelectionSet, tree: &CourseTree) -> bool {
    selection.iter().all(|&id| {
        match tree.get(id).and_then(|n| n.parent) {
            Some(parent) => selection.contains(&parent),
            None => true,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::course::CourseRecord;
    use crate::models::course::PricingMode;
    use std::collections::BTreeMap;

    fn record(id: u64, parent_id: Option<u64>) -> CourseRecord {
        CourseRecord {
            id,
            parent_id,
            name: format!("course-{id}"),
            category: String::new(),
            pricing_mode: PricingMode::PerVehicle,
            vehicle_prices: BTreeMap::new(),
            price_adult: 0.0,
            price_child: 0.0,
            price_infant: 0.0,
            duration_minutes: 60,
            lat: None,
            lon: None,
        }
    }

    fn sample_tree() -> CourseTree {
        // 1
        // ├─ 2
        // │  ├─ 4
        // │  └─ 5
        // └─ 3
        CourseTree::build(&[
            record(1, None),
            record(2, Some(1)),
            record(3, Some(1)),
            record(4, Some(2)),
            record(5, Some(2)),
        ])
    }

    #[test]
    fn test_select_pulls_in_ancestors() {
        let tree = sample_tree();
        let selection = propagate(&SelectionSet::new(), SelectionOp::Select(4), &tree);

        assert_eq!(selection, SelectionSet::from([1, 2, 4]));
        assert!(is_upward_closed(&selection, &tree));
    }

    #[test]
    fn test_deselect_removes_descendants() {
        let tree = sample_tree();
        let mut selection = SelectionSet::from([1, 2, 4, 5]);
        selection = propagate(&selection, SelectionOp::Deselect(2), &tree);

        assert_eq!(selection, SelectionSet::from([1]));
        assert!(is_upward_closed(&selection, &tree));
    }

    #[test]
    fn test_deselect_leaf_keeps_ancestors() {
        let tree = sample_tree();
        let mut selection = SelectionSet::from([1, 2, 4, 5]);
        selection = propagate(&selection, SelectionOp::Deselect(4), &tree);

        assert_eq!(selection, SelectionSet::from([1, 2, 5]));
    }

    #[test]
    fn test_unknown_id_is_raw_set_change_only() {
        let tree = sample_tree();
        let selection = propagate(&SelectionSet::new(), SelectionOp::Select(99), &tree);
        assert_eq!(selection, SelectionSet::from([99]));

        let selection = propagate(&selection, SelectionOp::Deselect(99), &tree);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_upward_closure_over_random_sequences() {
        let tree = sample_tree();
        let ops = [
            SelectionOp::Select(4),
            SelectionOp::Select(3),
            SelectionOp::Deselect(2),
            SelectionOp::Select(5),
            SelectionOp::Deselect(1),
            SelectionOp::Select(2),
            SelectionOp::Select(4),
            SelectionOp::Deselect(4),
        ];
        let mut selection = SelectionSet::new();
        for op in ops {
            selection = propagate(&selection, op, &tree);
            assert!(
                is_upward_closed(&selection, &tree),
                "closure violated after {op:?}: {selection:?}"
            );
        }
    }

    #[test]
    fn test_cycle_safe_propagation() {
        // A -> B -> A resolves both edges, forming a cycle
        let tree = CourseTree::build(&[record(1, Some(2)), record(2, Some(1))]);
        let selection = propagate(&SelectionSet::new(), SelectionOp::Select(1), &tree);
        assert!(selection.contains(&1));
        // Terminates with a finite set
        assert!(selection.len() <= 2);
    }
}
