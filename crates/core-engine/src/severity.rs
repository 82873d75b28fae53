//! Slide-level severity aggregation.

use core_schema::{Defect, Warning};

/// Sum of defect severities. Severities are non-negative by construction,
/// so the total is too.
pub fn total_severity(defects: &[Defect]) -> i64 {
    defects.iter().map(|d| d.severity).sum()
}

/// Sum of overlap areas across warnings — the "how much is hidden" score.
pub fn warning_severity(warnings: &[Warning]) -> i64 {
    warnings.iter().map(|w| w.details.overlap_area_px).sum()
}
