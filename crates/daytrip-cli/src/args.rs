//! Command-line argument definitions using clap's derive API.
//!
//! This module implements the CLI side of the parameter wrapper pattern:
//! clap-specific argument structures convert into the core's parameter
//! types via `From` impls, keeping the core free of framework derives.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use daytrip_core::params::{CreateItinerary, SaveTemplate, UpsertVehicle};

/// Main command-line interface for the Daytrip tour itinerary tool
///
/// Daytrip assembles guided day-tour itineraries from a hierarchical course
/// catalog: select courses, arrange and auto-schedule the stops, feed in a
/// calculated route, and produce a customer-facing quote.
#[derive(Parser)]
#[command(version, about, name = "dt")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/daytrip/daytrip.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Daytrip CLI
///
/// The CLI is organized into four command categories:
/// - `course`: Manage the course catalog (import, list)
/// - `vehicle`: Manage the rentable vehicle fleet
/// - `itinerary`: Assemble, schedule, and quote itineraries
/// - `template`: Save and reuse selection/schedule subsets
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the course catalog
    #[command(alias = "c")]
    Course {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Manage the vehicle fleet
    #[command(alias = "v")]
    Vehicle {
        #[command(subcommand)]
        command: VehicleCommands,
    },
    /// Assemble, schedule, and quote itineraries
    #[command(alias = "i")]
    Itinerary {
        #[command(subcommand)]
        command: ItineraryCommands,
    },
    /// Save and reuse selection/schedule templates
    #[command(alias = "t")]
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
}

// ============================================================================
// Course commands
// ============================================================================

/// Import a course catalog from a JSON file
#[derive(ClapArgs)]
pub struct ImportCoursesArgs {
    /// Path to a JSON array of course records
    #[arg(help = "JSON file containing the full course catalog")]
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum CourseCommands {
    /// Replace the stored catalog with the contents of a JSON file
    #[command(alias = "i")]
    Import(ImportCoursesArgs),
    /// Show the catalog as an indented hierarchy
    #[command(aliases = ["l", "ls"])]
    List,
}

// ============================================================================
// Vehicle commands
// ============================================================================

/// Add or update a vehicle
#[derive(ClapArgs)]
pub struct AddVehicleArgs {
    /// Human-readable vehicle name
    pub display_name: String,
    /// Explicit vehicle-type key; derived from the name when omitted
    #[arg(long, help = "Stable key for the vehicle type, e.g. 'minivan'")]
    pub key: Option<String>,
    /// Daily rental rate in dollars
    #[arg(long = "rate")]
    pub daily_rental_rate: f64,
    /// Fuel efficiency in miles per gallon
    #[arg(long = "mpg", default_value_t = 0.0)]
    pub miles_per_gallon: f64,
}

impl From<AddVehicleArgs> for UpsertVehicle {
    fn from(val: AddVehicleArgs) -> Self {
        UpsertVehicle {
            display_name: val.display_name,
            key: val.key,
            daily_rental_rate: val.daily_rental_rate,
            miles_per_gallon: val.miles_per_gallon,
        }
    }
}

/// Remove a vehicle
#[derive(ClapArgs)]
pub struct RemoveVehicleArgs {
    /// Vehicle-type key to remove
    pub key: String,
}

#[derive(Subcommand)]
pub enum VehicleCommands {
    /// Add or update a vehicle
    #[command(alias = "a")]
    Add(AddVehicleArgs),
    /// List the configured fleet
    #[command(aliases = ["l", "ls"])]
    List,
    /// Remove a vehicle
    #[command(aliases = ["rm", "d"])]
    Remove(RemoveVehicleArgs),
}

// ============================================================================
// Itinerary commands
// ============================================================================

/// Create a new itinerary
#[derive(ClapArgs)]
pub struct CreateItineraryArgs {
    /// Customer-facing name of the itinerary
    pub name: String,
}

impl From<CreateItineraryArgs> for CreateItinerary {
    fn from(val: CreateItineraryArgs) -> Self {
        CreateItinerary { name: val.name }
    }
}

/// Show an itinerary with its selection, schedule, and route
#[derive(ClapArgs)]
pub struct ShowItineraryArgs {
    /// ID of the itinerary to display
    pub id: u64,
}

/// Delete an itinerary permanently
#[derive(ClapArgs)]
pub struct DeleteItineraryArgs {
    /// ID of the itinerary to delete
    pub id: u64,
}

/// Select or deselect a course
#[derive(ClapArgs)]
pub struct SelectCourseArgs {
    /// Itinerary to modify
    pub id: u64,
    /// Course id to toggle
    pub course_id: u64,
}

/// Move a schedule item to a new position
#[derive(ClapArgs)]
pub struct MoveItemArgs {
    /// Itinerary to modify
    pub id: u64,
    /// Current 0-based position of the item
    pub from: usize,
    /// Target 0-based position
    pub to: usize,
}

/// Edit one schedule item's day, time, or duration
#[derive(ClapArgs)]
pub struct EditItemArgs {
    /// Itinerary to modify
    pub id: u64,
    /// 0-based position of the item to edit
    pub position: usize,
    /// Day label, e.g. "1일"; pass an empty string to clear
    #[arg(long)]
    pub day: Option<String>,
    /// Start time as HH:MM; pass an empty string to clear
    #[arg(long)]
    pub time: Option<String>,
    /// Stay duration in minutes
    #[arg(long)]
    pub duration: Option<u32>,
}

/// Apply a route summary from a JSON file
#[derive(ClapArgs)]
pub struct RouteArgs {
    /// Itinerary to modify
    pub id: u64,
    /// JSON file with total distance, duration, and leg durations
    pub file: PathBuf,
}

/// Drop the applied route
#[derive(ClapArgs)]
pub struct ClearRouteArgs {
    /// Itinerary to modify
    pub id: u64,
}

/// Fill day/time fields from the applied route
#[derive(ClapArgs)]
pub struct AutoScheduleArgs {
    /// Itinerary to auto-schedule
    pub id: u64,
}

/// Update pricing inputs on an itinerary
#[derive(ClapArgs)]
pub struct PricingArgs {
    /// Itinerary to modify
    pub id: u64,
    /// Number of participants (adult tier)
    #[arg(long)]
    pub participants: Option<u32>,
    /// Active vehicle type key; 'auto' picks one by party size
    #[arg(long)]
    pub vehicle: Option<String>,
    /// Gas price per gallon
    #[arg(long)]
    pub gas_price: Option<f64>,
    /// Manual trip mileage, used when no route is available
    #[arg(long)]
    pub mileage: Option<f64>,
    /// Manual fuel cost, overriding the mileage derivation
    #[arg(long)]
    pub fuel_cost: Option<f64>,
    /// Total guide working hours
    #[arg(long)]
    pub guide_hours: Option<f64>,
    /// Guide hourly rate
    #[arg(long)]
    pub guide_rate: Option<f64>,
    /// Manual guide fee, overriding hours x rate
    #[arg(long)]
    pub guide_fee: Option<f64>,
    /// Margin policy: default, low_season, high_season, failed_recruitment
    #[arg(long)]
    pub margin: Option<String>,
    /// Custom margin percentage for failed_recruitment
    #[arg(long)]
    pub custom_margin: Option<f64>,
}

/// Compute and display the quote
#[derive(ClapArgs)]
pub struct QuoteArgs {
    /// Itinerary to quote
    pub id: u64,
}

#[derive(Subcommand)]
pub enum ItineraryCommands {
    /// Create a new itinerary
    #[command(alias = "c")]
    Create(CreateItineraryArgs),
    /// List saved itineraries
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show an itinerary's selection, schedule, and route
    #[command(alias = "s")]
    Show(ShowItineraryArgs),
    /// Delete an itinerary permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteItineraryArgs),
    /// Select a course (ancestors follow automatically)
    Select(SelectCourseArgs),
    /// Deselect a course (descendants follow automatically)
    Deselect(SelectCourseArgs),
    /// Move a schedule item to a new position
    #[command(alias = "mv")]
    Move(MoveItemArgs),
    /// Edit one schedule item's day, time, or duration
    #[command(alias = "e")]
    Edit(EditItemArgs),
    /// Apply a route summary from a JSON file
    #[command(alias = "r")]
    Route(RouteArgs),
    /// Drop the applied route
    ClearRoute(ClearRouteArgs),
    /// Fill day/time fields from the applied route
    #[command(alias = "a")]
    Auto(AutoScheduleArgs),
    /// Update pricing inputs
    #[command(alias = "p")]
    Pricing(PricingArgs),
    /// Compute and display the quote
    #[command(alias = "q")]
    Quote(QuoteArgs),
}

// ============================================================================
// Template commands
// ============================================================================

/// Save an itinerary's selection and schedule as a template
#[derive(ClapArgs)]
pub struct SaveTemplateArgs {
    /// Template name (overwrites an existing template of the same name)
    pub name: String,
    /// Itinerary to take the selection and schedule from
    pub itinerary_id: u64,
}

/// Apply a template onto an itinerary
#[derive(ClapArgs)]
pub struct ApplyTemplateArgs {
    /// Template name
    pub name: String,
    /// Itinerary to apply the template onto
    pub itinerary_id: u64,
}

/// Delete a template
#[derive(ClapArgs)]
pub struct DeleteTemplateArgs {
    /// Template name
    pub name: String,
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// Save an itinerary's selection and schedule as a template
    #[command(alias = "s")]
    Save(SaveTemplateArgs),
    /// Apply a template onto an itinerary (keeps its pricing)
    #[command(alias = "a")]
    Apply(ApplyTemplateArgs),
    /// List templates
    #[command(aliases = ["l", "ls"])]
    List,
    /// Delete a template
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTemplateArgs),
}

/// Builds the core template parameters from a loaded itinerary snapshot.
pub fn template_params_from_snapshot(
    name: String,
    snapshot: &daytrip_core::ItinerarySnapshot,
) -> SaveTemplate {
    SaveTemplate {
        name,
        selected_ids: snapshot.selected_ids.clone(),
        schedule: snapshot.schedule.clone(),
    }
}
