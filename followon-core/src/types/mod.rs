//! Domain types shared across the engine.

pub mod award;
pub mod collections;
pub mod company;
pub mod detection;
pub mod evaluation;
pub mod fields;
pub mod patent;

pub use award::{Award, CompetitionType, Contract, Phase, VendorIdentity};
pub use company::CompanyId;
pub use detection::{BandCutpoints, ConfidenceBand, Detection, DetectionMethod};
pub use evaluation::{ConfusionMatrix, GroundTruthTransition};
pub use fields::{first_present_column, FieldSource, FieldValue};
pub use patent::AwardPatent;
