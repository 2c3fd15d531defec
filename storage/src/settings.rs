use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use tickdb_common::duration::{duration_to_ms, fmt_duration_ms, parse_duration_ms};

use crate::storage_error::{StorageError, StorageResult};

/// The deduplication interval applied to raw samples during data ingestion and
/// querying.
///
/// De-duplication is disabled for a zero interval. The interval is resolved
/// once, before the storage is initialized, and handed down to the dedup scans
/// by value; there is no global registry to consult.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DedupInterval(i64);

impl DedupInterval {
    /// De-duplication switched off.
    pub const DISABLED: DedupInterval = DedupInterval(0);

    /// Resolves `interval` to whole milliseconds.
    ///
    /// Intervals below one millisecond resolve to [`DedupInterval::DISABLED`].
    pub fn new(interval: Duration) -> StorageResult<Self> {
        let interval = DedupInterval(duration_to_ms(interval)?);
        info!("dedup interval set to {interval}");
        Ok(interval)
    }

    /// The interval in milliseconds. Zero means dedup is disabled.
    pub const fn millis(&self) -> i64 {
        self.0
    }

    pub const fn is_enabled(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for DedupInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_duration_ms(f, self.0)
    }
}

impl FromStr for DedupInterval {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DedupInterval(parse_duration_ms(s)?))
    }
}
