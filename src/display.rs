use chrono::NaiveDate;

use crate::roster::{LookupOutcome, Schedule, Volunteer, SHIFT_PATTERN};

/// Marker shown for a counter with nobody assigned, distinguishable from any
/// real assignment
pub const EMPTY_MARKER: &str = "[EMPTY]";

/// Comma-joined display form of one counter cell
pub fn format_duty_cell(cell: &[Volunteer]) -> String {
    if cell.is_empty() {
        EMPTY_MARKER.to_string()
    } else {
        format_volunteers(cell)
    }
}

/// Comma-joined display ids ("V-1, V-2, V-3")
pub fn format_volunteers(volunteers: &[Volunteer]) -> String {
    volunteers
        .iter()
        .map(|v| v.id_str())
        .collect::<Vec<String>>()
        .join(", ")
}

/// Prints the master schedule slot by slot
pub fn print_schedule(roster_date: NaiveDate, schedule: &Schedule) {
    println!("\n=== Master Schedule for {} ===", roster_date);
    println!(
        "Rotation Cycle: {}/4 (groups rotate daily to prevent burnout)",
        schedule.rotation_index + 1
    );
    println!("Volunteers on roster: {}", schedule.total_volunteers);

    for (slot_idx, entry) in SHIFT_PATTERN.iter().enumerate() {
        println!("\n{}", entry.label);
        for row in &schedule.rows {
            println!("  {} -> {}", row.counter_label, format_duty_cell(&row.cells[slot_idx]));
        }
    }
}

/// Prints the floating reserves, if any slot has them
pub fn print_reserves(schedule: &Schedule) {
    if schedule.reserves.is_empty() {
        return;
    }

    println!("\n=== Floating Reserves (Extras) ===");
    println!("On duty but not assigned to a specific counter. Use them for breaks.");
    for entry in &schedule.reserves {
        println!("  {} -> {}", entry.time_slot, format_volunteers(&entry.volunteers));
    }
}

/// Prints the result of a volunteer lookup
pub fn print_lookup(query: &str, outcome: &LookupOutcome) {
    match outcome {
        LookupOutcome::NoQuery => {
            println!("No volunteer number found in query '{}'", query);
        }
        LookupOutcome::NoDuty => {
            println!("No active duty found (Rest Day).");
        }
        LookupOutcome::OnDuty(records) => {
            for record in records {
                println!("  {} -> {} ({})", record.time_slot, record.location, record.role);
            }
        }
    }
}
