//! The itinerary engine: one editing session over a catalog.
//!
//! [`Itinerary`] owns the derived state for a single itinerary being
//! assembled and keeps it consistent by recomputing every derived value
//! from its declared inputs whenever one of them changes:
//!
//! ```text
//! catalog ──▶ tree ──┬──▶ leaf set ──▶ schedule ──▶ cost breakdown
//!                    │        ▲            │             ▲
//! selection ─────────┘        │        route legs        │
//!                        prev schedule             pricing inputs
//! ```
//!
//! The engine is single-threaded and reactive; there is no background
//! computation and no locking; external I/O (catalog load, route
//! calculation, persistence) happens outside and re-enters as ordinary
//! input changes. The only piece of control state is the `restoring` flag:
//! while a previously saved snapshot is being applied, the leaf-schedule
//! synchronizer is suppressed so it cannot overwrite the restored order
//! before both selection and schedule have landed.

use crate::autoschedule;
use crate::costing;
use crate::error::{Result, TourError};
use crate::models::pricing::{CostBreakdown, PricingInputs};
use crate::models::route::{Coordinate, RouteProvider, RouteSummary};
use crate::models::saved::ItinerarySnapshot;
use crate::models::schedule::{ScheduleEntry, ScheduleItem};
use crate::models::tree::CourseTree;
use crate::models::vehicle::VehicleSetting;
use crate::models::CourseRecord;
use crate::selection::{propagate, SelectionOp, SelectionSet};
use crate::sync;


/// A single itinerary editing session.
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    tree: CourseTree,
    selection: SelectionSet,
    schedule: Vec<ScheduleItem>,
    pricing: PricingInputs,
    route: Option<RouteSummary>,
    restoring: bool,
}

impl Itinerary {
    /// Starts an empty session over the given catalog.
    pub fn new(records: &[CourseRecord]) -> Self {
        Self {
            tree: CourseTree::build(records),
            ..Self::default()
        }
    }

    /// The derived course hierarchy.
    pub fn tree(&self) -> &CourseTree {
        &self.tree
    }

    /// The current selection set.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The ordered schedule list.
    pub fn schedule(&self) -> &[ScheduleItem] {
        &self.schedule
    }

    /// The current pricing inputs.
    pub fn pricing(&self) -> &PricingInputs {
        &self.pricing
    }

    /// The last applied route summary, if any.
    pub fn route(&self) -> Option<&RouteSummary> {
        self.route.as_ref()
    }

    /// Replaces the catalog and rebuilds everything derived from it.
    pub fn set_catalog(&mut self, records: &[CourseRecord]) {
        self.tree = CourseTree::build(records);
        self.resync();
    }

    /// Replaces the pricing inputs.
    pub fn set_pricing(&mut self, pricing: PricingInputs) {
        self.pricing = pricing;
    }

    /// Selects a course (and, implicitly, its ancestors).
    pub fn select(&mut self, id: u64) {
        self.selection = propagate(&self.selection, SelectionOp::Select(id), &self.tree);
        self.resync();
    }

    /// Deselects a course (and everything under it).
    pub fn deselect(&mut self, id: u64) {
        self.selection = propagate(&self.selection, SelectionOp::Deselect(id), &self.tree);
        self.resync();
    }

    /// Re-derives the schedule from the selection, unless a restore is in
    /// flight. Clears the route when the schedule empties out.
    fn resync(&mut self) {
        if self.restoring {
            return;
        }
        let outcome = sync::synchronize(&self.schedule, &self.selection, &self.tree);
        self.schedule = outcome.items;
        if outcome.route_cleared {
            self.route = None;
        }
    }

    /// Moves the item at `from` to position `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.schedule.len();
        if from >= len || to >= len {
            return Err(TourError::invalid_input(
                "position",
                format!("schedule has {len} items, cannot move {from} -> {to}"),
            ));
        }
        let item = self.schedule.remove(from);
        self.schedule.insert(to, item);
        Ok(())
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut ScheduleItem> {
        let len = self.schedule.len();
        self.schedule.get_mut(index).ok_or_else(|| {
            TourError::invalid_input("position", format!("schedule has {len} items, got {index}"))
        })
    }

    /// Sets (or clears) the day label of one schedule item.
    pub fn set_day(&mut self, index: usize, day: Option<String>) -> Result<()> {
        self.item_mut(index)?.day = day;
        Ok(())
    }

    /// Sets (or clears) the start time of one schedule item.
    pub fn set_time(&mut self, index: usize, time: Option<String>) -> Result<()> {
        if let Some(ref t) = time {
            if autoschedule::parse_time(t).is_none() {
                return Err(TourError::invalid_input(
                    "time",
                    format!("'{t}' is not a valid HH:MM time"),
                ));
            }
        }
        self.item_mut(index)?.time = time;
        Ok(())
    }

    /// Sets the stay duration of one schedule item.
    pub fn set_duration(&mut self, index: usize, minutes: u32) -> Result<()> {
        self.item_mut(index)?.duration_minutes = minutes;
        Ok(())
    }

    /// Waypoints for the route collaborator: every scheduled stop that has
    /// been geocoded, in schedule order.
    pub fn waypoints(&self) -> Vec<Coordinate> {
        self.schedule
            .iter()
            .filter_map(|item| {
                let record = self.tree.record(item.course_id)?;
                match (record.lat, record.lon) {
                    (Some(lat), Some(lon)) => Some(Coordinate {
                        lat,
                        lon,
                        label: Some(record.name.clone()),
                    }),
                    _ => None,
                }
            })
            .collect()
    }

    /// Asks the route collaborator for the closed-loop route over the
    /// current schedule and applies the result.
    ///
    /// On failure the typed error is surfaced and the previously applied
    /// route (and everything derived from it) stays valid.
    pub fn calculate_route<P: RouteProvider>(&mut self, provider: &P) -> Result<&RouteSummary> {
        let summary = provider.route(&self.waypoints())?;
        self.pricing.mileage = summary.total_distance_miles;
        Ok(self.route.insert(summary))
    }

    /// Applies a route summary, feeding its mileage into the pricing
    /// inputs.
    pub fn apply_route(&mut self, summary: RouteSummary) {
        self.pricing.mileage = summary.total_distance_miles;
        self.route = Some(summary);
    }

    /// Drops the applied route. Mileage keeps its last value so a quote
    /// remains possible via manual entry.
    pub fn clear_route(&mut self) {
        self.route = None;
    }

    /// Fills day/time fields from the applied route's leg durations.
    ///
    /// Fails with [`TourError::RouteRequired`] when no route has been
    /// applied.
    pub fn auto_schedule(&mut self) -> Result<()> {
        let legs = self
            .route
            .as_ref()
            .map(RouteSummary::forward_legs)
            .ok_or(TourError::RouteRequired)?;
        self.schedule = autoschedule::auto_schedule(&self.schedule, legs, &self.tree)?;
        Ok(())
    }

    /// Computes the derived quote for the active vehicle.
    pub fn quote(&self, vehicle: Option<&VehicleSetting>) -> CostBreakdown {
        costing::compute(
            &self.selection,
            &self.tree,
            &self.schedule,
            &self.pricing,
            vehicle,
        )
    }

    /// Serializes the session for the persistence collaborator.
    pub fn snapshot(&self) -> ItinerarySnapshot {
        ItinerarySnapshot {
            selected_ids: self.selection.iter().copied().collect(),
            schedule: self.schedule.iter().cloned().map(Into::into).collect(),
            pricing: self.pricing.clone(),
        }
    }

    /// Applies a previously saved snapshot.
    ///
    /// Selection and schedule are applied together with the synchronizer
    /// suppressed, so the restored order is not overwritten by a fresh
    /// derivation before both fields land. Legacy bare-id entries are
    /// normalized on the way in.
    pub fn restore(&mut self, snapshot: &ItinerarySnapshot) {
        self.restoring = true;
        self.selection = snapshot.selected_ids.iter().copied().collect();
        self.schedule = sync::normalize(&snapshot.schedule, &self.tree);
        self.pricing = snapshot.pricing.clone();
        self.restoring = false;
    }

    /// Applies a named template: a reusable selection + schedule subset.
    ///
    /// Unlike [`restore`](Self::restore) this keeps the current pricing
    /// inputs.
    pub fn apply_template(&mut self, selected_ids: &[u64], schedule: &[ScheduleEntry]) {
        self.restoring = true;
        self.selection = selected_ids.iter().copied().collect();
        self.schedule = sync::normalize(schedule, &self.tree);
        self.restoring = false;
    }
}
