use chrono::NaiveDate;

use super::allocate::{allocate_counters, build_shift_pool};
use super::cohorts::{build_cohorts, rotation_index, RotationMap};
use super::pattern::{COUNTERS, SHIFT_PATTERN};
use super::types::{CounterRow, ReserveEntry, Schedule};

/// Builds the full counter-major roster for one date. Everything is
/// recomputed from scratch; identical inputs give identical output.
pub fn build_schedule(total_volunteers: u32, roster_date: NaiveDate) -> Schedule {
    build_schedule_with_rotation(total_volunteers, rotation_index(roster_date))
}

/// Builds the roster from an explicit rotation index instead of a date
pub fn build_schedule_with_rotation(total_volunteers: u32, rotation: usize) -> Schedule {
    let cohorts = build_cohorts(total_volunteers);
    let map = RotationMap::new(cohorts, rotation);

    let mut rows: Vec<CounterRow> = (0..COUNTERS)
        .map(|i| CounterRow {
            counter_label: format!("Counter {}", i + 1),
            cells: Vec::with_capacity(SHIFT_PATTERN.len()),
        })
        .collect();
    let mut reserves: Vec<ReserveEntry> = Vec::new();

    // Allocate slot by slot, then transpose into counter rows. The reserves
    // log keeps pattern order and skips slots with nobody left over.
    for entry in &SHIFT_PATTERN {
        let pool = build_shift_pool(&map, entry);
        let allocation = allocate_counters(&pool, COUNTERS, entry.per_counter);

        for (row, assigned) in rows.iter_mut().zip(allocation.assignments) {
            row.cells.push(assigned);
        }

        if !allocation.reserves.is_empty() {
            reserves.push(ReserveEntry {
                time_slot: entry.label.to_string(),
                volunteers: allocation.reserves,
            });
        }
    }

    Schedule {
        total_volunteers,
        rotation_index: rotation % 4,
        rows,
        reserves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_fixed_shape() {
        let schedule = build_schedule_with_rotation(250, 0);
        assert_eq!(schedule.rows.len(), COUNTERS);
        for (i, row) in schedule.rows.iter().enumerate() {
            assert_eq!(row.counter_label, format!("Counter {}", i + 1));
            assert_eq!(row.cells.len(), SHIFT_PATTERN.len());
        }
    }

    #[test]
    fn even_roster_fills_every_counter_exactly() {
        // 240 volunteers, rotation 0: the opening peak slot merges cohorts
        // A and B (ids 1..=120) into 30 counters of 4 with nobody left over.
        let schedule = build_schedule_with_rotation(240, 0);

        let first_cell = &schedule.rows[0].cells[0];
        let ids: Vec<u32> = first_cell.iter().map(|v| v.id_num).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let last_cell = &schedule.rows[29].cells[0];
        let ids: Vec<u32> = last_cell.iter().map(|v| v.id_num).collect();
        assert_eq!(ids, vec![117, 118, 119, 120]);

        assert!(schedule.reserves.is_empty());
    }

    #[test]
    fn odd_roster_produces_reserves_in_pattern_order() {
        // 241 volunteers: cohorts sized 61/61/61/58. Every slot fed by one of
        // the 61-sized cohorts overflows, and the log keeps pattern order.
        let schedule = build_schedule_with_rotation(241, 0);
        assert!(!schedule.reserves.is_empty());

        let slot_positions: Vec<usize> = schedule
            .reserves
            .iter()
            .map(|r| {
                SHIFT_PATTERN
                    .iter()
                    .position(|e| e.label == r.time_slot)
                    .expect("reserve entry names a pattern slot")
            })
            .collect();
        let mut sorted = slot_positions.clone();
        sorted.sort();
        assert_eq!(slot_positions, sorted);

        // "16:00 - 18:00 (Off)" runs on slot key '1' alone: 61 volunteers for
        // 30 counters of 2 leaves exactly the 61st id in reserve.
        let off_slot = schedule
            .reserves
            .iter()
            .find(|r| r.time_slot == "16:00 - 18:00 (Off)")
            .expect("the first off-peak slot overflows");
        let ids: Vec<u32> = off_slot.volunteers.iter().map(|v| v.id_num).collect();
        assert_eq!(ids, vec![61]);
    }

    #[test]
    fn under_supplied_slot_leaves_short_counters() {
        // Rotation 0, 241 volunteers: the 10:00 peak slot merges cohorts C
        // and D (61 + 58 = 119 volunteers) against a demand of 120, so the
        // last counter comes up one short.
        let schedule = build_schedule_with_rotation(241, 0);
        let last_cell = &schedule.rows[29].cells[1];
        assert_eq!(last_cell.len(), 3);
    }

    #[test]
    fn building_twice_yields_identical_output() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 9).unwrap();
        assert_eq!(build_schedule(250, date), build_schedule(250, date));
    }

    #[test]
    fn rotation_index_is_stored_normalized() {
        let schedule = build_schedule_with_rotation(240, 7);
        assert_eq!(schedule.rotation_index, 3);
    }

    #[test]
    fn single_volunteer_roster_still_assembles() {
        let schedule = build_schedule_with_rotation(1, 0);
        assert_eq!(schedule.rows.len(), COUNTERS);
        // V-1 sits in cohort A, so only slots driven by key '1' see anyone.
        let on_duty: usize = schedule.rows[0]
            .cells
            .iter()
            .map(|cell| cell.len())
            .sum();
        assert_eq!(on_duty, 4);
        assert!(schedule.reserves.is_empty());
    }
}
