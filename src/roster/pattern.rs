/// Number of staffed counters in the hall
pub const COUNTERS: usize = 30;

/// Default roster size offered by the callers
pub const DEFAULT_VOLUNTEERS: u32 = 250;

/// Practical staffing floor, enforced by the CLI and web handlers.
/// The core pipeline itself accepts any roster size down to 1.
pub const MIN_VOLUNTEERS: u32 = 240;

/// One entry of the fixed 24-hour shift pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftEntry {
    pub label: &'static str,
    /// Rotation slot keys on duty during this entry
    pub active_keys: &'static [char],
    /// Headcount required at each counter
    pub per_counter: usize,
}

/// The full day in 2-hour blocks: 4 peak entries (two groups on duty, 4 per
/// counter) and 8 off-peak entries (one group, 2 per counter) with the
/// off-peak key cycling '1','2','3','4' twice. The table is declared, not
/// derived; the key-to-hour order must stay exactly as written.
pub const SHIFT_PATTERN: [ShiftEntry; 12] = [
    ShiftEntry { label: "08:00 - 10:00 (Peak)", active_keys: &['1', '2'], per_counter: 4 },
    ShiftEntry { label: "10:00 - 12:00 (Peak)", active_keys: &['3', '4'], per_counter: 4 },
    ShiftEntry { label: "12:00 - 14:00 (Peak)", active_keys: &['1', '2'], per_counter: 4 },
    ShiftEntry { label: "14:00 - 16:00 (Peak)", active_keys: &['3', '4'], per_counter: 4 },
    ShiftEntry { label: "16:00 - 18:00 (Off)", active_keys: &['1'], per_counter: 2 },
    ShiftEntry { label: "18:00 - 20:00 (Off)", active_keys: &['2'], per_counter: 2 },
    ShiftEntry { label: "20:00 - 22:00 (Off)", active_keys: &['3'], per_counter: 2 },
    ShiftEntry { label: "22:00 - 00:00 (Off)", active_keys: &['4'], per_counter: 2 },
    ShiftEntry { label: "00:00 - 02:00 (Off)", active_keys: &['1'], per_counter: 2 },
    ShiftEntry { label: "02:00 - 04:00 (Off)", active_keys: &['2'], per_counter: 2 },
    ShiftEntry { label: "04:00 - 06:00 (Off)", active_keys: &['3'], per_counter: 2 },
    ShiftEntry { label: "06:00 - 08:00 (Off)", active_keys: &['4'], per_counter: 2 },
];
