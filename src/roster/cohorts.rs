use chrono::{Datelike, NaiveDate};

use super::types::Volunteer;

/// One of the 4 contiguous partitions of the roster, ordered ascending by id
pub type Cohort = Vec<Volunteer>;

/// Splits the roster [1..=total] into 4 contiguous cohorts.
/// The first 3 take ceil(total/4) volunteers each, the 4th takes whatever
/// remains (possibly nothing for very small rosters).
pub fn build_cohorts(total: u32) -> [Cohort; 4] {
    let roster: Vec<Volunteer> = (1..=total).map(Volunteer::new).collect();
    let chunk = (roster.len() + 3) / 4;

    std::array::from_fn(|i| {
        let start = (i * chunk).min(roster.len());
        let end = if i == 3 {
            roster.len()
        } else {
            ((i + 1) * chunk).min(roster.len())
        };
        roster[start..end].to_vec()
    })
}

/// Day-derived index selecting which cohort fills which rotation slot.
/// Same date always yields the same index; consecutive days advance it by
/// 1 mod 4 so no group keeps the same hours for long.
pub fn rotation_index(date: NaiveDate) -> usize {
    (date.ordinal() % 4) as usize
}

/// Date-rotated binding of the 4 cohorts to the abstract slot keys '1'-'4'
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationMap {
    slots: [Cohort; 4],
}

impl RotationMap {
    /// Left-rotates the cohort sequence by `rotation` positions and binds the
    /// result to keys '1'..'4' in order. Out-of-range rotation values are
    /// taken modulo 4.
    pub fn new(cohorts: [Cohort; 4], rotation: usize) -> Self {
        let r = rotation % 4;
        Self {
            slots: std::array::from_fn(|i| cohorts[(i + r) % 4].clone()),
        }
    }

    /// The cohort bound to a slot key. Keys outside '1'..'4' yield an empty
    /// cohort rather than a panic.
    pub fn cohort(&self, key: char) -> &[Volunteer] {
        match key {
            '1' => &self.slots[0],
            '2' => &self.slots[1],
            '3' => &self.slots[2],
            '4' => &self.slots[3],
            _ => &[],
        }
    }
}
