//! Auto-scheduler: best-effort forward fill of day and time fields.
//!
//! Walks the ordered schedule once, applying stay durations and per-leg
//! travel times from the route collaborator. Derived times are rounded up
//! to the next 10-minute mark and wrap modulo 24h; the day advances after
//! an accommodation stop. The fill never overwrites a time the user
//! entered, and only rewrites a day label on post-accommodation items.

use jiff::civil;

use crate::error::{Result, TourError};
use crate::models::schedule::ScheduleItem;
use crate::models::tree::CourseTree;

/// Parses the leading integer out of a day label ("2일", "2", "2nd day").
pub fn parse_day(label: &str) -> Option<u32> {
    let digits: String = label
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Formats a day counter into the label form used throughout ("1일").
pub fn format_day(day: u32) -> String {
    format!("{day}일")
}

/// Parses an "HH:MM" string into minutes since midnight.
pub fn parse_time(s: &str) -> Option<u32> {
    civil::Time::strptime("%H:%M", s.trim())
        .ok()
        .map(|t| t.hour() as u32 * 60 + t.minute() as u32)
}

/// Formats minutes since midnight back into "HH:MM".
pub fn format_time(minutes: u32) -> String {
    let minutes = minutes % (24 * 60);
    civil::time((minutes / 60) as i8, (minutes % 60) as i8, 0, 0)
        .strftime("%H:%M")
        .to_string()
}

/// Itinerary length in days: the max parsed day label, defaulting to 1.
pub fn number_of_days(items: &[ScheduleItem]) -> u32 {
    items
        .iter()
        .filter_map(|item| item.day.as_deref().and_then(parse_day))
        .max()
        .unwrap_or(1)
}

/// Fills in day/time fields across the schedule.
///
/// `legs_secs` holds travel durations for the gap between item `i` and
/// `i + 1`. Refuses with [`TourError::RouteRequired`] when no travel-time
/// data is present at all; a missing individual leg just skips that step's
/// time derivation. Steps whose previous item lacks a time are skipped
/// without error, since a next-day start cannot be derived without a stated
/// start time.
pub fn auto_schedule(
    items: &[ScheduleItem],
    legs_secs: &[u32],
    tree: &CourseTree,
) -> Result<Vec<ScheduleItem>> {
    if items.len() >= 2 && legs_secs.is_empty() {
        return Err(TourError::RouteRequired);
    }

    let mut result = items.to_vec();
    if result.is_empty() {
        return Ok(result);
    }

    if result[0].day.as_deref().map_or(true, str::is_empty) {
        result[0].day = Some(format_day(1));
    }
    let mut running_day = result[0].day.as_deref().and_then(parse_day).unwrap_or(1);

    for i in 1..result.len() {
        let prev = result[i - 1].clone();

        if tree.is_accommodation(prev.course_id) {
            // Overnight stay: the next stop starts the following day
            let prev_day = prev.day.as_deref().and_then(parse_day).unwrap_or(running_day);
            running_day = prev_day + 1;
            result[i].day = Some(format_day(running_day));
            // A manually entered time survives; otherwise the start time
            // of a new day cannot be derived and stays blank
            continue;
        }

        match result[i].day.as_deref().and_then(parse_day) {
            Some(explicit) => running_day = explicit,
            None => result[i].day = Some(format_day(running_day)),
        }

        let same_day = result[i].day.as_deref().and_then(parse_day)
            == prev.day.as_deref().and_then(parse_day);
        if !same_day || result[i].time.is_some() {
            continue;
        }

        let Some(prev_minutes) = prev.time.as_deref().and_then(parse_time) else {
            // Chain broken: nothing to derive from
            continue;
        };
        let Some(&leg) = legs_secs.get(i - 1) else {
            continue;
        };

        let total = prev_minutes as f64 + prev.duration_minutes as f64 + leg as f64 / 60.0;
        let rounded = ((total / 10.0).ceil() * 10.0) as u32;
        result[i].time = Some(format_time(rounded));
    }

    Ok(result)
}
