use tickdb_common::time::Timestamp;

/// Removes samples from `src_timestamps`/`src_values` if they are closer to
/// each other than `dedup_interval` milliseconds, keeping the last sample in
/// each interval-aligned bucket. Both buffers are compacted in place.
///
/// De-duplication is disabled if `dedup_interval` is zero or negative.
pub fn deduplicate_samples(
    src_timestamps: &mut Vec<Timestamp>,
    src_values: &mut Vec<f64>,
    dedup_interval: i64,
) {
    deduplicate(src_timestamps, src_values, dedup_interval)
}

/// Same as [`deduplicate_samples`], but for samples whose values are still in
/// their raw encoded integer form. Used when merging block streams, before
/// values are decoded. Values are compared as integers on timestamp conflict.
pub fn deduplicate_samples_during_merge(
    src_timestamps: &mut Vec<Timestamp>,
    src_values: &mut Vec<i64>,
    dedup_interval: i64,
) {
    deduplicate(src_timestamps, src_values, dedup_interval)
}

fn deduplicate<V>(src_timestamps: &mut Vec<Timestamp>, src_values: &mut Vec<V>, dedup_interval: i64)
where
    V: Copy + PartialOrd,
{
    if !needs_dedup(src_timestamps, dedup_interval) {
        // Fast path - nothing to deduplicate
        return;
    }

    // needs_dedup returned true, so there are at least two samples.
    let mut ts_next = next_grid_boundary(src_timestamps[0], dedup_interval);
    let mut j: usize = 0;
    let mut prev_ts = src_timestamps[0];
    let mut value = src_values[0];
    let mut prev_value = value;
    for i in 1..src_timestamps.len() {
        let ts = src_timestamps[i];
        let mut v = src_values[i - 1];
        if i > 1 && src_timestamps[i - 1] == src_timestamps[i - 2] && v < prev_value {
            // prefer the biggest value on timestamp conflict
            v = prev_value;
        }
        value = v;
        prev_value = v;
        prev_ts = src_timestamps[i - 1];
        if ts <= ts_next {
            continue;
        }
        src_timestamps[j] = prev_ts;
        src_values[j] = value;
        j += 1;
        ts_next += dedup_interval;
        if ts_next < ts {
            ts_next = next_grid_boundary(ts, dedup_interval);
        }
    }

    let last_ts = src_timestamps[src_timestamps.len() - 1];
    let mut last_value = src_values[src_values.len() - 1];
    if last_ts == prev_ts && last_value < value {
        last_value = value;
    }
    src_timestamps[j] = last_ts;
    src_values[j] = last_value;
    j += 1;
    src_timestamps.truncate(j);
    src_values.truncate(j);
}

/// Returns whether the given sorted timestamps contain at least two samples
/// falling into the same `dedup_interval`-aligned bucket.
///
/// Must walk the grid exactly like [`deduplicate`] does, so that the fast-path
/// decision and the actual scan never disagree.
pub(crate) fn needs_dedup(timestamps: &[Timestamp], dedup_interval: i64) -> bool {
    if timestamps.len() < 2 || dedup_interval <= 0 {
        return false;
    }
    let mut ts_next = next_grid_boundary(timestamps[0], dedup_interval);
    for i in 1..timestamps.len() {
        let ts = timestamps[i];
        if ts <= ts_next {
            return true;
        }
        ts_next += dedup_interval;
        if ts_next < ts {
            ts_next = next_grid_boundary(ts, dedup_interval);
        }
    }
    false
}

/// Returns the smallest multiple of `dedup_interval` at or after `ts`.
///
/// A sample sitting exactly on a grid line belongs to the bucket ending there.
#[inline]
fn next_grid_boundary(ts: Timestamp, dedup_interval: i64) -> Timestamp {
    let ts_next = ts + dedup_interval - 1;
    ts_next - (ts_next % dedup_interval)
}
