//! Hierarchical view over the flat course catalog.
//!
//! The tree is an arena keyed by course id rather than a web of owning
//! pointers: the parent edge set comes straight from catalog data and may
//! contain dangling references or cycles, so every traversal carries a
//! visited-id guard and terminates on revisit. Dangling parents demote the
//! record to a root (with a warning) instead of failing the build.

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::models::course::CourseRecord;

/// A single node in the course hierarchy.
#[derive(Debug, Clone)]
pub struct CourseNode {
    /// The underlying catalog record
    pub record: CourseRecord,

    /// Resolved parent id, `None` for roots (including demoted danglers)
    pub parent: Option<u64>,

    /// Child course ids, in catalog order
    pub children: Vec<u64>,

    /// Depth in the hierarchy; roots are level 0
    pub level: u32,
}

/// Derived, rebuild-on-change view over `CourseRecord[]`.
///
/// Never mutated in place by consumers; rebuild via [`CourseTree::build`]
/// whenever the underlying catalog changes.
#[derive(Debug, Clone, Default)]
pub struct CourseTree {
    nodes: HashMap<u64, CourseNode>,
    roots: Vec<u64>,
    /// All ids in catalog order, used for deterministic iteration
    order: Vec<u64>,
}

impl CourseTree {
    /// Builds the hierarchy from flat records.
    ///
    /// Linking and leveling are both O(n). A record whose `parent_id` does
    /// not resolve is treated as a root; this mirrors the permissiveness of
    /// the catalog source and is reported via `log::warn!` rather than an
    /// error.
    pub fn build(records: &[CourseRecord]) -> Self {
        let mut nodes: HashMap<u64, CourseNode> = records
            .iter()
            .map(|r| {
                (
                    r.id,
                    CourseNode {
                        record: r.clone(),
                        parent: None,
                        children: Vec::new(),
                        level: 0,
                    },
                )
            })
            .collect();

        let ids: HashSet<u64> = records.iter().map(|r| r.id).collect();
        let mut roots = Vec::new();

        for record in records {
            match record.parent_id {
                Some(parent_id) if ids.contains(&parent_id) && parent_id != record.id => {
                    if let Some(parent) = nodes.get_mut(&parent_id) {
                        parent.children.push(record.id);
                    }
                    if let Some(node) = nodes.get_mut(&record.id) {
                        node.parent = Some(parent_id);
                    }
                }
                Some(parent_id) => {
                    warn!(
                        "course {} references missing parent {}; treating as root",
                        record.id, parent_id
                    );
                    roots.push(record.id);
                }
                None => roots.push(record.id),
            }
        }

        let mut tree = Self {
            nodes,
            roots,
            order: records.iter().map(|r| r.id).collect(),
        };
        tree.assign_levels();
        tree
    }

    /// Assigns `level = parent level + 1` from each root downward.
    ///
    /// The visited guard keeps a cyclic child edge from looping; nodes
    /// unreachable from any root (members of a pure cycle) keep level 0.
    fn assign_levels(&mut self) {
        let mut visited = HashSet::new();
        let mut stack: Vec<(u64, u32)> = self.roots.iter().map(|&id| (id, 0)).collect();

        while let Some((id, level)) = stack.pop() {
            if !visited.insert(id) {
                warn!("cycle detected at course {id} while assigning levels");
                continue;
            }
            if let Some(node) = self.nodes.get_mut(&id) {
                node.level = level;
                for &child in &node.children {
                    stack.push((child, level + 1));
                }
            }
        }
    }

    /// Whether the tree contains the given course id.
    pub fn contains(&self, id: u64) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Looks up a node by id.
    pub fn get(&self, id: u64) -> Option<&CourseNode> {
        self.nodes.get(&id)
    }

    /// Looks up the underlying record by id.
    pub fn record(&self, id: u64) -> Option<&CourseRecord> {
        self.nodes.get(&id).map(|n| &n.record)
    }

    /// Root course ids, in catalog order.
    pub fn roots(&self) -> &[u64] {
        &self.roots
    }

    /// All course ids, in catalog order.
    pub fn ids(&self) -> &[u64] {
        &self.order
    }

    /// Number of courses in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every ancestor of `id`, nearest first.
    ///
    /// Walks parent links upward with a visited guard so an accidental
    /// cycle in the data yields a finite list instead of a hang.
    pub fn ancestor_ids(&self, id: u64) -> Vec<u64> {
        let mut ancestors = Vec::new();
        let mut visited = HashSet::new();
        visited.insert(id);

        let mut current = self.nodes.get(&id).and_then(|n| n.parent);
        while let Some(parent_id) = current {
            if !visited.insert(parent_id) {
                warn!("cycle detected at course {parent_id} while walking ancestors");
                break;
            }
            ancestors.push(parent_id);
            current = self.nodes.get(&parent_id).and_then(|n| n.parent);
        }
        ancestors
    }

    /// Every descendant of `id`, depth-first, cycle-guarded.
    pub fn descendant_ids(&self, id: u64) -> Vec<u64> {
        let mut descendants = Vec::new();
        let mut visited = HashSet::new();
        visited.insert(id);

        let mut stack: Vec<u64> = match self.nodes.get(&id) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return descendants,
        };

        while let Some(child_id) = stack.pop() {
            if !visited.insert(child_id) {
                warn!("cycle detected at course {child_id} while walking descendants");
                continue;
            }
            descendants.push(child_id);
            if let Some(node) = self.nodes.get(&child_id) {
                for &grandchild in node.children.iter().rev() {
                    stack.push(grandchild);
                }
            }
        }
        descendants
    }

    /// Whether the course at `id` is an accommodation node.
    ///
    /// Unknown ids are not accommodations.
    pub fn is_accommodation(&self, id: u64) -> bool {
        self.record(id).map(|r| r.is_accommodation()).unwrap_or(false)
    }
}
