use common::ErrorLocation;

use thiserror::Error as ThisError;

/// A `workspace/project` identifier that does not follow the format.
#[derive(Debug, ThisError)]
pub enum IdentError {
    #[error("Dataset Id Missing Separator: {value:?} {location}")]
    MissingSeparator {
        value: String,
        location: ErrorLocation,
    },

    #[error("Dataset Id Has Extra Separator: {value:?} {location}")]
    ExtraSeparator {
        value: String,
        location: ErrorLocation,
    },

    #[error("Dataset Id Has Empty Segment: {value:?} {location}")]
    EmptySegment {
        value: String,
        location: ErrorLocation,
    },
}
