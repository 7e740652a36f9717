//! Leaf-schedule synchronizer.
//!
//! Derives the ordered schedule list from the selection set. A selected id
//! is a *leaf* iff none of its descendants are also selected, and leaves are
//! the stops that actually appear in the day plan. The synchronizer runs
//! whenever the selection or the catalog changes (but not while a snapshot
//! restore is in flight, see [`crate::engine`]) and preserves user edits:
//! items whose course is still a leaf keep their relative order and their
//! manually entered day/time/duration, new leaves are appended in catalog
//! order.

use crate::models::schedule::{ScheduleEntry, ScheduleItem};
use crate::models::tree::CourseTree;
use crate::selection::SelectionSet;

/// Result of a synchronization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome {
    /// The new schedule list: retained items followed by new leaves
    pub items: Vec<ScheduleItem>,

    /// True when the list became empty, signalling the consumer to clear
    /// any rendered route overlay
    pub route_cleared: bool,
}

/// Every selected id that is a leaf of the selection, in catalog order.
pub fn leaf_ids(selection: &SelectionSet, tree: &CourseTree) -> Vec<u64> {
    tree.ids()
        .iter()
        .copied()
        .filter(|id| selection.contains(id))
        .filter(|&id| {
            !tree
                .descendant_ids(id)
                .iter()
                .any(|d| selection.contains(d))
        })
        .collect()
}

/// Upgrades persisted entries to full schedule items.
///
/// Bare-id entries (the legacy shape) are seeded with the course's catalog
/// duration and empty day/time; unknown courses get a zero duration.
pub fn normalize(entries: &[ScheduleEntry], tree: &CourseTree) -> Vec<ScheduleItem> {
    entries
        .iter()
        .map(|entry| match entry {
            ScheduleEntry::Full(item) => item.clone(),
            ScheduleEntry::Bare(id) => ScheduleItem::new(
                *id,
                tree.record(*id).map(|r| r.duration_minutes).unwrap_or(0),
            ),
        })
        .collect()
}

/// Re-derives the schedule list from the current selection.
///
/// The output is exactly the leaf set, duplicate-free, with existing items
/// kept in their relative order ahead of newly added leaves. Unrelated
/// selection churn therefore never reorders what the user arranged.
pub fn synchronize(
    existing: &[ScheduleItem],
    selection: &SelectionSet,
    tree: &CourseTree,
) -> SyncOutcome {
    let leaves = leaf_ids(selection, tree);

    let mut items: Vec<ScheduleItem> = existing
        .iter()
        .filter(|item| leaves.contains(&item.course_id))
        .cloned()
        .collect();
    // A course can appear at most once; drop duplicates while keeping the
    // first occurrence
    let mut seen = std::collections::HashSet::new();
    items.retain(|item| seen.insert(item.course_id));

    for &leaf in &leaves {
        if !seen.contains(&leaf) {
            items.push(ScheduleItem::new(
                leaf,
                tree.record(leaf).map(|r| r.duration_minutes).unwrap_or(0),
            ));
            seen.insert(leaf);
        }
    }

    let route_cleared = items.is_empty();
    SyncOutcome {
        items,
        route_cleared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::course::{CourseRecord, PricingMode};
    use crate::selection::{propagate, SelectionOp};
    use std::collections::BTreeMap;

    fn record(id: u64, parent_id: Option<u64>, duration: u32) -> CourseRecord {
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
            duration_minutes: duration,
            lat: None,
            lon: None,
        }
    }

    fn sample_tree() -> CourseTree {
        CourseTree::build(&[
            record(1, None, 0),
            record(2, Some(1), 45),
            record(3, Some(1), 60),
            record(4, Some(2), 30),
            record(5, Some(2), 90),
        ])
    }

    #[test]
    fn test_leaf_ids_excludes_selected_parents() {
        let tree = sample_tree();
        let selection = SelectionSet::from([1, 2, 4]);
        assert_eq!(leaf_ids(&selection, &tree), vec![4]);
    }

    #[test]
    fn test_leaf_ids_category_without_selected_children() {
        let tree = sample_tree();
        // 2 has children 4 and 5, but neither is selected, so 2 is a leaf
        let selection = SelectionSet::from([1, 2]);
        assert_eq!(leaf_ids(&selection, &tree), vec![2]);
    }

    #[test]
    fn test_leaf_set_has_no_selected_descendants() {
        let tree = sample_tree();
        let selection = SelectionSet::from([1, 2, 3, 4, 5]);
        let leaves = leaf_ids(&selection, &tree);
        for &leaf in &leaves {
            assert!(!tree
                .descendant_ids(leaf)
                .iter()
                .any(|d| selection.contains(d)));
        }
        assert_eq!(leaves, vec![3, 4, 5]);
    }

    #[test]
    fn test_synchronize_seeds_catalog_duration() {
        let tree = sample_tree();
        let selection = SelectionSet::from([1, 2, 4]);
        let outcome = synchronize(&[], &selection, &tree);

        assert_eq!(outcome.items.len(), 1);
        assert_eq!(outcome.items[0].course_id, 4);
        assert_eq!(outcome.items[0].duration_minutes, 30);
        assert!(outcome.items[0].day.is_none());
        assert!(!outcome.route_cleared);
    }

    #[test]
    fn test_synchronize_preserves_order_and_edits() {
        let tree = sample_tree();
        let mut selection = SelectionSet::from([1, 2, 4, 5]);
        let outcome = synchronize(&[], &selection, &tree);
        assert_eq!(
            outcome.items.iter().map(|i| i.course_id).collect::<Vec<_>>(),
            vec![4, 5]
        );

        // User reorders and edits
        let mut edited = vec![outcome.items[1].clone(), outcome.items[0].clone()];
        edited[0].time = Some("09:00".to_string());
        edited[0].duration_minutes = 120;

        // Unrelated selection change: add course 3
        selection = propagate(&selection, SelectionOp::Select(3), &tree);
        let outcome = synchronize(&edited, &selection, &tree);

        let ids: Vec<u64> = outcome.items.iter().map(|i| i.course_id).collect();
        assert_eq!(ids, vec![5, 4, 3]);
        assert_eq!(outcome.items[0].time.as_deref(), Some("09:00"));
        assert_eq!(outcome.items[0].duration_minutes, 120);
    }

    #[test]
    fn test_synchronize_single_new_leaf_appends() {
        let tree = sample_tree();
        let selection = SelectionSet::from([1, 2, 4]);
        let base = synchronize(&[], &selection, &tree).items;

        let grown = propagate(&selection, SelectionOp::Select(5), &tree);
        let outcome = synchronize(&base, &grown, &tree);

        // Exactly the old list with the new id appended
        assert_eq!(outcome.items[..base.len()], base[..]);
        assert_eq!(outcome.items.last().unwrap().course_id, 5);
    }

    #[test]
    fn test_synchronize_removes_items_when_child_selected() {
        let tree = sample_tree();
        // 2 is a leaf while no child is selected
        let selection = SelectionSet::from([1, 2]);
        let base = synchronize(&[], &selection, &tree).items;
        assert_eq!(base[0].course_id, 2);

        // Selecting 4 makes 2 an interior node; its item must go
        let grown = propagate(&selection, SelectionOp::Select(4), &tree);
        let outcome = synchronize(&base, &grown, &tree);
        let ids: Vec<u64> = outcome.items.iter().map(|i| i.course_id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn test_synchronize_empty_clears_route() {
        let tree = sample_tree();
        let outcome = synchronize(
            &[ScheduleItem::new(4, 30)],
            &SelectionSet::new(),
            &tree,
        );
        assert!(outcome.items.is_empty());
        assert!(outcome.route_cleared);
    }

    #[test]
    fn test_normalize_upgrades_bare_ids() {
        let tree = sample_tree();
        let entries = vec![
            ScheduleEntry::Bare(5),
            ScheduleEntry::Full(ScheduleItem {
                course_id: 4,
                day: Some("1일".to_string()),
                time: Some("10:00".to_string()),
                duration_minutes: 30,
            }),
            ScheduleEntry::Bare(404),
        ];
        let items = normalize(&entries, &tree);

        assert_eq!(items[0], ScheduleItem::new(5, 90));
        assert_eq!(items[1].time.as_deref(), Some("10:00"));
        assert_eq!(items[2], ScheduleItem::new(404, 0));
    }

    #[test]
    fn test_synchronize_duplicate_free() {
        let tree = sample_tree();
        let selection = SelectionSet::from([1, 2, 4]);
        let duplicated = vec![ScheduleItem::new(4, 30), ScheduleItem::new(4, 30)];
        let outcome = synchronize(&duplicated, &selection, &tree);
        assert_eq!(outcome.items.len(), 1);
    }
}
