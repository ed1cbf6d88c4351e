use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Survey lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStatus {
    /// Initial state, content is editable and no responses are collected
    #[default]
    Draft,
    /// Open for invitations and responses
    Published,
    /// Terminal for response collection, content is read-only
    Archived,
}

impl SurveyStatus {
    pub const ALL: [SurveyStatus; 3] = [Self::Draft, Self::Published, Self::Archived];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    /// Title, description, category, frequency and questions may change
    pub fn allows_content_changes(&self) -> bool {
        !matches!(self, Self::Archived)
    }

    pub fn accepts_invitations(&self) -> bool {
        !matches!(self, Self::Archived)
    }

    pub fn accepts_responses(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl FromStr for SurveyStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(CoreError::InvalidSurveyStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SurveyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
