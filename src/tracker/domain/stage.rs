//! Pipeline stage of a job application.

use super::ParseStageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage of an application.
///
/// Stages are listed in pipeline order, but any stage may be reassigned to
/// any other, including moving backward. [`Stage::Rejected`] can be reached
/// from every stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    /// Saved for later; not yet applied.
    #[default]
    Saved,
    /// Application submitted.
    Applied,
    /// Online assessment in progress.
    Oa,
    /// Interviewing.
    Interview,
    /// Offer received.
    Offer,
    /// Rejected at any point in the pipeline.
    Rejected,
}

impl Stage {
    /// Every stage in pipeline order.
    pub const ALL: [Self; 6] = [
        Self::Saved,
        Self::Applied,
        Self::Oa,
        Self::Interview,
        Self::Offer,
        Self::Rejected,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Saved => "SAVED",
            Self::Applied => "APPLIED",
            Self::Oa => "OA",
            Self::Interview => "INTERVIEW",
            Self::Offer => "OFFER",
            Self::Rejected => "REJECTED",
        }
    }
}

impl TryFrom<&str> for Stage {
    type Error = ParseStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "SAVED" => Ok(Self::Saved),
            "APPLIED" => Ok(Self::Applied),
            "OA" => Ok(Self::Oa),
            "INTERVIEW" => Ok(Self::Interview),
            "OFFER" => Ok(Self::Offer),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(ParseStageError(value.to_owned())),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
