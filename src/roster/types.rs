use serde::{Serialize, Deserialize};

/// A volunteer on the roster, identified by a positive contiguous number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Volunteer {
    pub id_num: u32,
}

impl Volunteer {
    pub fn new(id_num: u32) -> Self {
        Self { id_num }
    }

    /// Display form used in tables, exports and search results (e.g. "V-12")
    pub fn id_str(&self) -> String {
        format!("V-{}", self.id_num)
    }
}

/// Result of distributing one time slot's pool across the counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAllocation {
    pub assignments: Vec<Vec<Volunteer>>, // one entry per counter, possibly empty
    pub reserves: Vec<Volunteer>,
}

/// One counter's row in the master schedule, one typed cell per time slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRow {
    pub counter_label: String,
    pub cells: Vec<Vec<Volunteer>>, // indexed by position in the shift pattern
}

/// Volunteers on duty in one time slot but not assigned to any counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveEntry {
    pub time_slot: String,
    pub volunteers: Vec<Volunteer>,
}

/// Assembled roster for one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub total_volunteers: u32,
    pub rotation_index: usize,
    pub rows: Vec<CounterRow>,
    pub reserves: Vec<ReserveEntry>,
}

/// One duty record returned by the volunteer lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyRecord {
    pub time_slot: String,
    pub location: String,
    pub role: String,
}

/// Outcome of a lookup query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The query carried no digits, so no search was performed
    NoQuery,
    /// The query named a volunteer that is neither on a counter nor in reserve
    NoDuty,
    /// Duty records for the volunteer, counter duty first, then standby
    OnDuty(Vec<DutyRecord>),
}
