//! Command handlers bridging parsed arguments to the core.
//!
//! Each itinerary-editing command follows the same load/apply/save shape:
//! the saved configuration is restored into an engine session against the
//! current catalog, the operation runs in memory, and the resulting
//! snapshot is written back.

use anyhow::{Context, Result};
use daytrip_core::{
    models::vehicle::vehicle_type_for_party, params, CourseRecord, CourseTreeView, Itinerary,
    ItinerarySummaries, MarginCategory, SavedItinerary, ScheduleView, TourError, VehicleList,
};
use log::info;

use crate::args::{
    template_params_from_snapshot, CourseCommands, ItineraryCommands, PricingArgs,
    TemplateCommands, VehicleCommands,
};
use crate::renderer::TerminalRenderer;
use crate::route_file::FileRouteProvider;

/// Command dispatcher holding the operator and renderer.
pub struct Cli {
    operator: daytrip_core::Operator,
    renderer: TerminalRenderer,
}

/// A saved itinerary restored into an engine session.
struct Session {
    saved: SavedItinerary,
    itinerary: Itinerary,
}

impl Cli {
    pub fn new(operator: daytrip_core::Operator, renderer: TerminalRenderer) -> Self {
        Self { operator, renderer }
    }

    // ------------------------------------------------------------------
    // Course commands
    // ------------------------------------------------------------------

    pub async fn handle_course_command(self, command: CourseCommands) -> Result<()> {
        match command {
            CourseCommands::Import(args) => {
                let contents = std::fs::read_to_string(&args.file)
                    .with_context(|| format!("Failed to read {}", args.file.display()))?;
                let records: Vec<CourseRecord> = serde_json::from_str(&contents)
                    .with_context(|| format!("Invalid catalog file {}", args.file.display()))?;

                let count = self.operator.import_courses(records).await?;
                info!("imported {count} courses");
                self.renderer
                    .render(&format!("Imported {count} courses.\n"))
            }
            CourseCommands::List => {
                let tree = self.operator.load_tree().await?;
                self.renderer
                    .render(&format!("{}", CourseTreeView::new(&tree)))
            }
        }
    }

    // ------------------------------------------------------------------
    // Vehicle commands
    // ------------------------------------------------------------------

    pub async fn handle_vehicle_command(self, command: VehicleCommands) -> Result<()> {
        match command {
            VehicleCommands::Add(args) => {
                let vehicle = self.operator.upsert_vehicle(&args.into()).await?;
                self.renderer.render(&format!(
                    "Saved vehicle `{}`.\n\n{vehicle}",
                    vehicle.vehicle_type
                ))
            }
            VehicleCommands::List => {
                let vehicles = self.operator.list_vehicles().await?;
                self.renderer.render(&format!("{}", VehicleList(vehicles)))
            }
            VehicleCommands::Remove(args) => {
                self.operator.remove_vehicle(&args.key).await?;
                self.renderer
                    .render(&format!("Removed vehicle `{}`.\n", args.key))
            }
        }
    }

    // ------------------------------------------------------------------
    // Itinerary commands
    // ------------------------------------------------------------------

    pub async fn handle_itinerary_command(self, command: ItineraryCommands) -> Result<()> {
        match command {
            ItineraryCommands::Create(args) => {
                let created = self.operator.create_itinerary(&args.into()).await?;
                self.renderer.render(&format!(
                    "Created itinerary with ID: {}\n\n{created}",
                    created.id
                ))
            }
            ItineraryCommands::List => self.list_itineraries().await,
            ItineraryCommands::Show(args) => {
                let session = self.load_session(args.id).await?;
                let mut output = format!("{}", session.saved);
                output.push_str("\n## Courses\n\n");
                output.push_str(&format!(
                    "{}",
                    CourseTreeView::with_selection(
                        session.itinerary.tree(),
                        session.itinerary.selection()
                    )
                ));
                output.push_str("\n## Schedule\n\n");
                output.push_str(&format!(
                    "{}",
                    ScheduleView::new(session.itinerary.schedule(), session.itinerary.tree())
                ));
                self.renderer.render(&output)
            }
            ItineraryCommands::Delete(args) => {
                self.operator
                    .delete_itinerary(&params::Id { id: args.id })
                    .await?;
                self.renderer
                    .render(&format!("Deleted itinerary {}.\n", args.id))
            }
            ItineraryCommands::Select(args) => {
                let mut session = self.load_session(args.id).await?;
                if !session.itinerary.tree().contains(args.course_id) {
                    return Err(TourError::CourseNotFound { id: args.course_id }.into());
                }
                session.itinerary.select(args.course_id);
                self.save_and_show_schedule(args.id, session.itinerary).await
            }
            ItineraryCommands::Deselect(args) => {
                let mut session = self.load_session(args.id).await?;
                session.itinerary.deselect(args.course_id);
                self.save_and_show_schedule(args.id, session.itinerary).await
            }
            ItineraryCommands::Move(args) => {
                let mut session = self.load_session(args.id).await?;
                session.itinerary.move_item(args.from, args.to)?;
                self.save_and_show_schedule(args.id, session.itinerary).await
            }
            ItineraryCommands::Edit(args) => {
                let mut session = self.load_session(args.id).await?;
                if let Some(day) = args.day {
                    let day = if day.is_empty() { None } else { Some(day) };
                    session.itinerary.set_day(args.position, day)?;
                }
                if let Some(time) = args.time {
                    let time = if time.is_empty() { None } else { Some(time) };
                    session.itinerary.set_time(args.position, time)?;
                }
                if let Some(duration) = args.duration {
                    session.itinerary.set_duration(args.position, duration)?;
                }
                self.save_and_show_schedule(args.id, session.itinerary).await
            }
            ItineraryCommands::Route(args) => {
                let mut session = self.load_session(args.id).await?;
                let provider = FileRouteProvider::new(args.file);
                let summary = session.itinerary.calculate_route(&provider)?.clone();
                self.save_session(args.id, &session.itinerary).await?;
                self.renderer.render(&format!(
                    "Applied route: {:.1} miles, {:.1} hours, {} legs.\n",
                    summary.total_distance_miles,
                    summary.total_duration_hours,
                    summary.leg_durations_secs.len()
                ))
            }
            ItineraryCommands::ClearRoute(args) => {
                let mut session = self.load_session(args.id).await?;
                session.itinerary.clear_route();
                self.save_session(args.id, &session.itinerary).await?;
                self.renderer.render("Cleared route.\n")
            }
            ItineraryCommands::Auto(args) => {
                let mut session = self.load_session(args.id).await?;
                session.itinerary.auto_schedule()?;
                self.save_and_show_schedule(args.id, session.itinerary).await
            }
            ItineraryCommands::Pricing(args) => {
                let id = args.id;
                let mut session = self.load_session(id).await?;
                let pricing = self.updated_pricing(&session.itinerary, args)?;
                session.itinerary.set_pricing(pricing);
                self.save_session(id, &session.itinerary).await?;
                self.renderer.render("Updated pricing inputs.\n")
            }
            ItineraryCommands::Quote(args) => {
                let session = self.load_session(args.id).await?;
                let vehicle_type = session.itinerary.pricing().vehicle_type.clone();
                let vehicle = self.operator.get_vehicle(&vehicle_type).await?;
                let breakdown = session.itinerary.quote(vehicle.as_ref());
                self.renderer.render(&format!("{breakdown}"))
            }
        }
    }

    /// Applies pricing flags over the session's current inputs.
    fn updated_pricing(
        &self,
        itinerary: &Itinerary,
        args: PricingArgs,
    ) -> Result<daytrip_core::PricingInputs> {
        let mut pricing = itinerary.pricing().clone();

        if let Some(participants) = args.participants {
            pricing.participants = participants;
            // Changing the party size re-derives the vehicle unless one is
            // pinned explicitly in the same invocation
            if args.vehicle.is_none() {
                pricing.vehicle_type = vehicle_type_for_party(participants).to_string();
            }
        }
        if let Some(vehicle) = args.vehicle {
            pricing.vehicle_type = if vehicle == "auto" {
                vehicle_type_for_party(pricing.participants).to_string()
            } else {
                vehicle
            };
        }
        if let Some(gas_price) = args.gas_price {
            pricing.gas_price = gas_price;
        }
        if let Some(mileage) = args.mileage {
            pricing.mileage = mileage;
        }
        if let Some(fuel_cost) = args.fuel_cost {
            pricing.fuel_cost_override = Some(fuel_cost);
        }
        if let Some(guide_hours) = args.guide_hours {
            pricing.guide_hours = guide_hours;
        }
        if let Some(guide_rate) = args.guide_rate {
            pricing.guide_hourly_rate = guide_rate;
        }
        if let Some(guide_fee) = args.guide_fee {
            pricing.guide_fee_override = Some(guide_fee);
        }
        if let Some(margin) = args.margin {
            pricing.margin_category = margin
                .parse::<MarginCategory>()
                .map_err(anyhow::Error::msg)?;
        }
        if let Some(custom_margin) = args.custom_margin {
            pricing.custom_margin_pct = Some(custom_margin);
        }
        Ok(pricing)
    }

    // ------------------------------------------------------------------
    // Template commands
    // ------------------------------------------------------------------

    pub async fn handle_template_command(self, command: TemplateCommands) -> Result<()> {
        match command {
            TemplateCommands::Save(args) => {
                let session = self.load_session(args.itinerary_id).await?;
                let template_params =
                    template_params_from_snapshot(args.name, &session.saved.snapshot);
                let template = self.operator.save_template(&template_params).await?;
                self.renderer
                    .render(&format!("Saved template `{}`.\n\n{template}", template.name))
            }
            TemplateCommands::Apply(args) => {
                let mut session = self.load_session(args.itinerary_id).await?;
                let template = self.operator.get_template(&args.name).await?;
                session
                    .itinerary
                    .apply_template(&template.selected_ids, &template.schedule);
                self.save_and_show_schedule(args.itinerary_id, session.itinerary)
                    .await
            }
            TemplateCommands::List => {
                let templates = self.operator.list_templates().await?;
                if templates.is_empty() {
                    self.renderer.render("No templates.\n")
                } else {
                    let mut output = String::new();
                    for template in &templates {
                        output.push_str(&format!("{template}"));
                    }
                    self.renderer.render(&output)
                }
            }
            TemplateCommands::Delete(args) => {
                self.operator.delete_template(&args.name).await?;
                self.renderer
                    .render(&format!("Deleted template `{}`.\n", args.name))
            }
        }
    }

    pub async fn list_itineraries(&self) -> Result<()> {
        let summaries = self.operator.list_itineraries().await?;
        self.renderer
            .render(&format!("{}", ItinerarySummaries(summaries)))
    }

    // ------------------------------------------------------------------
    // Session plumbing
    // ------------------------------------------------------------------

    async fn load_session(&self, id: u64) -> Result<Session> {
        let saved = self
            .operator
            .get_itinerary(&params::Id { id })
            .await?
            .ok_or(TourError::ItineraryNotFound { id })?;

        let records = self.operator.list_courses().await?;
        let mut itinerary = Itinerary::new(&records);
        itinerary.restore(&saved.snapshot);
        if let Some(route) = &saved.route {
            itinerary.apply_route(route.clone());
        }

        Ok(Session { saved, itinerary })
    }

    async fn save_session(&self, id: u64, itinerary: &Itinerary) -> Result<SavedItinerary> {
        let saved = self
            .operator
            .save_itinerary(&params::SaveItinerary {
                id,
                snapshot: itinerary.snapshot(),
                route: itinerary.route().cloned(),
            })
            .await?;
        Ok(saved)
    }

    async fn save_and_show_schedule(&self, id: u64, itinerary: Itinerary) -> Result<()> {
        self.save_session(id, &itinerary).await?;
        self.renderer.render(&format!(
            "{}",
            ScheduleView::new(itinerary.schedule(), itinerary.tree())
        ))
    }
}
