//! Canonical run-report artifacts.
//!
//! A report captures what one drive did — world, order, stop reason,
//! counters — as canonical JSON with a domain-separated digest, so equal
//! runs produce byte-identical artifacts and equal digests.

use std::fs;
use std::path::Path;

use cairn_search::canon::{canonical_json_bytes, CanonError};
use cairn_search::contract::SearchSpaceV1;
use cairn_search::digest::{digest_bytes, RunDigest, DOMAIN_RUN_REPORT};
use cairn_search::engine::TreeSearchV1;
use cairn_search::frontier::ExploreOrder;
use cairn_search::stats::SearchStatsV1;

use crate::runner::StopReasonV1;

/// File name of the canonical report payload inside a report directory.
pub const REPORT_FILE: &str = "report.json";

/// File name of the report digest inside a report directory.
pub const DIGEST_FILE: &str = "report.digest";

/// Aggregate record of one drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReportV1 {
    /// Stable world identifier.
    pub world_id: String,
    /// Exploration order the search was constructed with.
    pub order: ExploreOrder,
    /// Why the drive stopped.
    pub stop_reason: StopReasonV1,
    /// Whether an incumbent existed when the drive stopped.
    pub solved: bool,
    /// High-water mark of frontier size.
    pub frontier_high_water: u64,
    /// Step counters.
    pub stats: SearchStatsV1,
}

impl RunReportV1 {
    /// Snapshot a report from a search after a drive.
    #[must_use]
    pub fn from_search<S: SearchSpaceV1>(
        world_id: &str,
        search: &TreeSearchV1<S>,
        stop_reason: StopReasonV1,
    ) -> Self {
        Self {
            world_id: world_id.to_string(),
            order: search.order(),
            stop_reason,
            solved: search.best().is_some(),
            frontier_high_water: search.frontier_high_water(),
            stats: *search.stats(),
        }
    }

    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "world_id": self.world_id,
            "order": self.order.label(),
            "stop_reason": self.stop_reason.label(),
            "solved": self.solved,
            "frontier_high_water": self.frontier_high_water,
            "stats": self.stats.to_json_value(),
        })
    }

    /// Canonical JSON bytes of this report.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if a non-integer number reaches the
    /// canonicalizer (all report fields are integers, so this indicates a
    /// bug in the report mapping itself).
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Digest of the canonical report bytes.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from serialization.
    pub fn digest(&self) -> Result<RunDigest, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(digest_bytes(DOMAIN_RUN_REPORT, &bytes))
    }
}

/// Failure while writing a report directory.
#[derive(Debug)]
pub enum ReportWriteError {
    /// Canonical serialization failed.
    Canon(CanonError),
    /// Filesystem write failed.
    Io { detail: String },
}

impl std::fmt::Display for ReportWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canon(err) => write!(f, "canonical serialization failed: {err}"),
            Self::Io { detail } => write!(f, "report write failed: {detail}"),
        }
    }
}

impl std::error::Error for ReportWriteError {}

impl From<CanonError> for ReportWriteError {
    fn from(err: CanonError) -> Self {
        Self::Canon(err)
    }
}

/// Write `report.json` and `report.digest` into `dir`.
///
/// Returns the digest that was written.
///
/// # Errors
///
/// Returns [`ReportWriteError`] on serialization or filesystem failure.
pub fn write_report(dir: &Path, report: &RunReportV1) -> Result<RunDigest, ReportWriteError> {
    let bytes = report.to_canonical_json_bytes()?;
    let digest = digest_bytes(DOMAIN_RUN_REPORT, &bytes);
    fs::write(dir.join(REPORT_FILE), &bytes).map_err(|err| ReportWriteError::Io {
        detail: err.to_string(),
    })?;
    fs::write(dir.join(DIGEST_FILE), digest.as_str()).map_err(|err| ReportWriteError::Io {
        detail: err.to_string(),
    })?;
    Ok(digest)
}
