//! Vehicle settings and vehicle-type helpers.

use serde::{Deserialize, Serialize};

/// A rentable vehicle configuration, keyed by `vehicle_type`.
///
/// Read-only input to the cost pipeline; exactly one entry is active per
/// quote, selected by the pricing inputs' vehicle type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleSetting {
    /// Stable string key, e.g. "minivan" or a slugified custom name
    pub vehicle_type: String,

    /// Human-readable name
    pub display_name: String,

    /// Rental cost per itinerary day
    pub daily_rental_rate: f64,

    /// Fuel efficiency in miles per gallon; 0 disables fuel cost
    pub miles_per_gallon: f64,
}

/// Picks the vehicle type that fits a party of the given size.
pub fn vehicle_type_for_party(participants: u32) -> &'static str {
    match participants {
        0..=4 => "minivan",
        5..=8 => "9seater",
        9..=12 => "13seater",
        _ => "25seater",
    }
}

/// Slugifies a display name into a vehicle-type key, avoiding collisions
/// with existing keys by appending `-2`, `-3`, ...
pub fn vehicle_key(display_name: &str, existing: &[String]) -> String {
    let base: String = display_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let base = base.trim_matches('-').to_string();
    let base = if base.is_empty() {
        "vehicle".to_string()
    } else {
        // Collapse runs of separators left by punctuation/whitespace
        let mut collapsed = String::with_capacity(base.len());
        let mut prev_dash = false;
        for c in base.chars() {
            if c == '-' {
                if !prev_dash {
                    collapsed.push(c);
                }
                prev_dash = true;
            } else {
                collapsed.push(c);
                prev_dash = false;
            }
        }
        collapsed
    };

    if !existing.iter().any(|k| k == &base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !existing.iter().any(|k| k == &candidate) {
            return candidate;
        }
        n += 1;
    }
}
