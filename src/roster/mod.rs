pub mod types;
pub mod pattern;
pub mod cohorts;
pub mod allocate;
pub mod assemble;
pub mod search;

pub use types::{CounterRow, DutyRecord, LookupOutcome, ReserveEntry, Schedule, Volunteer};
pub use pattern::{COUNTERS, DEFAULT_VOLUNTEERS, MIN_VOLUNTEERS, SHIFT_PATTERN};
pub use cohorts::{build_cohorts, rotation_index, RotationMap};
pub use assemble::{build_schedule, build_schedule_with_rotation};
pub use search::find_volunteer;
