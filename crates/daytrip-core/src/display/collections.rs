//! Collection wrapper types and borrowed views for display.
//!
//! Newtype wrappers give collections a Display implementation with
//! graceful empty handling; the borrowed views combine two structures
//! (schedule + tree) into one rendering.

use std::collections::HashSet;
use std::fmt;

use crate::models::{CourseTree, ItinerarySummary, ScheduleItem, VehicleSetting};
use crate::selection::SelectionSet;

/// Newtype wrapper for displaying the configured vehicle fleet.
pub struct VehicleList(pub Vec<VehicleSetting>);

impl fmt::Display for VehicleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No vehicles configured.")
        } else {
            for vehicle in &self.0 {
                write!(f, "{vehicle}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying saved itinerary listings.
pub struct ItinerarySummaries(pub Vec<ItinerarySummary>);

impl fmt::Display for ItinerarySummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No saved itineraries.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}

/// Borrowed view rendering the course hierarchy as an indented list, with
/// selection markers when a selection set is supplied.
pub struct CourseTreeView<'a> {
    tree: &'a CourseTree,
    selection: Option<&'a SelectionSet>,
}

impl<'a> CourseTreeView<'a> {
    /// A plain catalog view without selection markers.
    pub fn new(tree: &'a CourseTree) -> Self {
        Self {
            tree,
            selection: None,
        }
    }

    /// A view that marks selected courses.
    pub fn with_selection(tree: &'a CourseTree, selection: &'a SelectionSet) -> Self {
        Self {
            tree,
            selection: Some(selection),
        }
    }

    fn fmt_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: u64,
        visited: &mut HashSet<u64>,
    ) -> fmt::Result {
        if !visited.insert(id) {
            return Ok(());
        }
        let Some(node) = self.tree.get(id) else {
            return Ok(());
        };

        let indent = "  ".repeat(node.level as usize);
        let marker = match self.selection {
            Some(selection) if selection.contains(&id) => "[x]",
            Some(_) => "[ ]",
            None => "-",
        };
        writeln!(f, "{indent}{marker} {} (#{id})", node.record.name)?;

        for &child in &node.children {
            self.fmt_node(f, child, visited)?;
        }
        Ok(())
    }
}

impl fmt::Display for CourseTreeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tree.is_empty() {
            return writeln!(f, "No courses in the catalog.");
        }
        let mut visited = HashSet::new();
        for &root in self.tree.roots() {
            self.fmt_node(f, root, &mut visited)?;
        }
        Ok(())
    }
}

/// Borrowed view rendering the ordered schedule, resolving course names
/// through the tree.
pub struct ScheduleView<'a> {
    items: &'a [ScheduleItem],
    tree: &'a CourseTree,
}

impl<'a> ScheduleView<'a> {
    pub fn new(items: &'a [ScheduleItem], tree: &'a CourseTree) -> Self {
        Self { items, tree }
    }
}

impl fmt::Display for ScheduleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return writeln!(f, "Nothing scheduled.");
        }
        for (index, item) in self.items.iter().enumerate() {
            let name = self
                .tree
                .record(item.course_id)
                .map(|r| r.name.as_str())
                .unwrap_or("(unknown course)");
            let day = item.day.as_deref().unwrap_or("-");
            let time = item.time.as_deref().unwrap_or("--:--");
            writeln!(
                f,
                "{index}. [{day} {time}] {name} ({} min)",
                item.duration_minutes
            )?;
        }
        Ok(())
    }
}
