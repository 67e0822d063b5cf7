use super::pattern::SHIFT_PATTERN;
use super::types::{DutyRecord, LookupOutcome, Schedule, Volunteer};

/// Pulls the digit characters out of a free-text query ("v100", "V-100" and
/// "100" all name volunteer 100). Returns None when no digits are present.
fn extract_query_number(query: &str) -> Option<String> {
    let digits: String = query.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Looks a volunteer up across counter duty and the reserve area.
///
/// Matching is an exact membership test on the typed cell contents, so
/// searching for volunteer 1 never hits the cells that only hold V-10 or
/// V-100. A query without digits performs no search at all; a query that
/// matches nothing reports an explicit no-duty outcome.
pub fn find_volunteer(schedule: &Schedule, query: &str) -> LookupOutcome {
    let digits = match extract_query_number(query) {
        Some(digits) => digits,
        None => return LookupOutcome::NoQuery,
    };

    // Ids beyond u32 cannot exist on any roster; a query that overflows
    // simply matches nobody.
    let target = match digits.parse::<u32>() {
        Ok(id_num) => Volunteer::new(id_num),
        Err(_) => return LookupOutcome::NoDuty,
    };

    let mut found: Vec<DutyRecord> = Vec::new();

    for row in &schedule.rows {
        for (slot_idx, cell) in row.cells.iter().enumerate() {
            if cell.contains(&target) {
                found.push(DutyRecord {
                    time_slot: SHIFT_PATTERN[slot_idx].label.to_string(),
                    location: row.counter_label.clone(),
                    role: "Counter Duty".to_string(),
                });
            }
        }
    }

    for entry in &schedule.reserves {
        if entry.volunteers.contains(&target) {
            found.push(DutyRecord {
                time_slot: entry.time_slot.clone(),
                location: "Reserve Area".to_string(),
                role: "Standby".to_string(),
            });
        }
    }

    if found.is_empty() {
        LookupOutcome::NoDuty
    } else {
        LookupOutcome::OnDuty(found)
    }
}
