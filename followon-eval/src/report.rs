//! Narrative quality report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

use followon_core::types::ConfusionMatrix;

use crate::types::BandBreakdown;

/// Precision below this is flagged in the narrative.
pub const PRECISION_FLOOR: f64 = 0.70;
/// Recall below this is flagged in the narrative.
pub const RECALL_FLOOR: f64 = 0.60;

/// Overall verdict of an evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Both metrics at or above their floors.
    Pass,
    /// Exactly one metric below its floor.
    Warning,
    /// Both metrics below their floors.
    Failure,
}

impl ReportStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warning => "warning",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify overall quality. An evaluation with nothing on either side is
/// vacuously a pass — there was nothing to get wrong.
pub fn status_for(precision: f64, recall: f64, detected_count: u64, truth_count: u64) -> ReportStatus {
    if detected_count == 0 && truth_count == 0 {
        return ReportStatus::Pass;
    }
    let low_precision = precision < PRECISION_FLOOR;
    let low_recall = recall < RECALL_FLOOR;
    match (low_precision, low_recall) {
        (true, true) => ReportStatus::Failure,
        (false, false) => ReportStatus::Pass,
        _ => ReportStatus::Warning,
    }
}

/// Render the human-readable narrative: overall metrics, confusion table,
/// per-band table, and recommendations keyed on the failing metric.
pub fn narrative(
    confusion: &ConfusionMatrix,
    precision: f64,
    recall: f64,
    f1: f64,
    bands: &[BandBreakdown],
    status: ReportStatus,
    truth_count: u64,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Transition detection evaluation — {}", status);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Overall: precision {:.3}, recall {:.3}, f1 {:.3} against {} ground-truth pairs",
        precision, recall, f1, truth_count
    );
    let _ = writeln!(
        out,
        "Confusion: tp={} fp={} fn={} tn={} (tn undefined — open candidate universe)",
        confusion.tp, confusion.fp, confusion.fn_, confusion.tn
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Per-band breakdown:");
    for row in bands {
        let _ = writeln!(
            out,
            "  {:<8} detections={:<6} tp={:<6} fp={:<6} precision={:.3}",
            row.band.name(),
            row.detections,
            row.tp,
            row.fp,
            row.precision
        );
    }
    let _ = writeln!(out);

    match status {
        ReportStatus::Pass => {
            let _ = writeln!(out, "Both precision and recall are within target.");
        }
        _ => {
            if precision < PRECISION_FLOOR {
                let _ = writeln!(
                    out,
                    "Precision {:.3} is below {:.2}: consider raising the score threshold or tightening fuzzy-name acceptance.",
                    precision, PRECISION_FLOOR
                );
            }
            if recall < RECALL_FLOOR {
                let _ = writeln!(
                    out,
                    "Recall {:.3} is below {:.2}: consider lowering the score threshold or widening the lookback window.",
                    recall, RECALL_FLOOR
                );
            }
        }
    }
    out
}
