use std::path::Path;

use csv::WriterBuilder;

use crate::display::format_duty_cell;
use crate::roster::{Schedule, SHIFT_PATTERN};

/// Renders the schedule as CSV text: header row ["Counter", ...time slots],
/// then one row per counter in index order, cells exactly as displayed.
pub fn schedule_to_csv(schedule: &Schedule) -> Result<String, Box<dyn std::error::Error>> {
    let mut wtr = WriterBuilder::new().from_writer(vec![]);

    let mut header: Vec<String> = vec!["Counter".to_string()];
    header.extend(SHIFT_PATTERN.iter().map(|e| e.label.to_string()));
    wtr.write_record(&header)?;

    for row in &schedule.rows {
        let mut record: Vec<String> = vec![row.counter_label.clone()];
        record.extend(row.cells.iter().map(|cell| format_duty_cell(cell)));
        wtr.write_record(&record)?;
    }

    let bytes = wtr.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes the roster CSV to disk under the same name the web page offers for
/// download
pub fn write_roster_csv<P: AsRef<Path>>(
    schedule: &Schedule,
    path: P,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, schedule_to_csv(schedule)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::build_schedule_with_rotation;

    #[test]
    fn header_names_every_time_slot() {
        let schedule = build_schedule_with_rotation(240, 0);
        let csv = schedule_to_csv(&schedule).unwrap();
        let header = csv.lines().next().unwrap();
        assert!(header.starts_with("Counter,08:00 - 10:00 (Peak),"));
        assert_eq!(header.split(',').count(), 13);
    }

    #[test]
    fn one_data_row_per_counter_in_order() {
        let schedule = build_schedule_with_rotation(240, 0);
        let csv = schedule_to_csv(&schedule).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 31);
        assert!(lines[1].starts_with("Counter 1,"));
        assert!(lines[30].starts_with("Counter 30,"));
    }

    #[test]
    fn cells_with_commas_are_quoted() {
        let schedule = build_schedule_with_rotation(240, 0);
        let csv = schedule_to_csv(&schedule).unwrap();
        let first_row = csv.lines().nth(1).unwrap();
        assert!(first_row.starts_with("Counter 1,\"V-1, V-2, V-3, V-4\""));
    }

    #[test]
    fn export_is_byte_identical_across_builds() {
        let a = schedule_to_csv(&build_schedule_with_rotation(241, 2)).unwrap();
        let b = schedule_to_csv(&build_schedule_with_rotation(241, 2)).unwrap();
        assert_eq!(a, b);
    }
}
