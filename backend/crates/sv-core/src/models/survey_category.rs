use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Closed vocabulary of survey categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SurveyCategory {
    #[default]
    Engagement,
    Culture,
    Leadership,
    Satisfaction,
    Wellbeing,
    Performance,
    Custom,
}

impl SurveyCategory {
    pub const ALL: [SurveyCategory; 7] = [
        Self::Engagement,
        Self::Culture,
        Self::Leadership,
        Self::Satisfaction,
        Self::Wellbeing,
        Self::Performance,
        Self::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engagement => "engagement",
            Self::Culture => "culture",
            Self::Leadership => "leadership",
            Self::Satisfaction => "satisfaction",
            Self::Wellbeing => "wellbeing",
            Self::Performance => "performance",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for SurveyCategory {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match Self::ALL.into_iter().find(|category| category.as_str() == s) {
            Some(category) => Ok(category),
            None => Err(CoreError::InvalidSurveyCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SurveyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
