use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How often a survey is meant to be run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SurveyFrequency {
    Weekly,
    Monthly,
    #[default]
    Quarterly,
    /// Twice a year
    Biannually,
    Annually,
    /// Run once, no recurrence
    Onetime,
}

impl SurveyFrequency {
    pub const ALL: [SurveyFrequency; 6] = [
        Self::Weekly,
        Self::Monthly,
        Self::Quarterly,
        Self::Biannually,
        Self::Annually,
        Self::Onetime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Biannually => "biannually",
            Self::Annually => "annually",
            Self::Onetime => "onetime",
        }
    }
}

impl FromStr for SurveyFrequency {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match Self::ALL.into_iter().find(|frequency| frequency.as_str() == s) {
            Some(frequency) => Ok(frequency),
            None => Err(CoreError::InvalidSurveyFrequency {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SurveyFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
