use super::cohorts::RotationMap;
use super::pattern::ShiftEntry;
use super::types::{SlotAllocation, Volunteer};

/// Merges the cohorts active during one pattern entry into a single pool,
/// re-sorted ascending by id. The re-sort is what keeps volunteers grouped by
/// number instead of by rotated cohort inside a merged shift.
pub fn build_shift_pool(map: &RotationMap, entry: &ShiftEntry) -> Vec<Volunteer> {
    let mut pool: Vec<Volunteer> = Vec::new();
    for &key in entry.active_keys {
        pool.extend_from_slice(map.cohort(key));
    }
    pool.sort_by_key(|v| v.id_num);
    pool
}

/// Slices a shift pool into `counters` contiguous groups of `per_counter`.
/// When the pool runs out the remaining groups come back short or empty; when
/// it overflows, everyone past `counters * per_counter` lands in the
/// reserves. No rebalancing in either direction.
pub fn allocate_counters(pool: &[Volunteer], counters: usize, per_counter: usize) -> SlotAllocation {
    let mut assignments = Vec::with_capacity(counters);
    for i in 0..counters {
        let start = (i * per_counter).min(pool.len());
        let end = (start + per_counter).min(pool.len());
        assignments.push(pool[start..end].to_vec());
    }

    let reserves = pool[(counters * per_counter).min(pool.len())..].to_vec();

    SlotAllocation { assignments, reserves }
}
