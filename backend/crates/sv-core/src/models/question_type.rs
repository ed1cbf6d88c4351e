use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Agreement scale (strongly disagree .. strongly agree)
    Likert,
    /// Free-form answer
    Text,
    MultipleChoice,
    SingleChoice,
    Rating,
    YesNo,
    /// Net promoter score, 0-10
    Nps,
}

impl QuestionType {
    pub const ALL: [QuestionType; 7] = [
        Self::Likert,
        Self::Text,
        Self::MultipleChoice,
        Self::SingleChoice,
        Self::Rating,
        Self::YesNo,
        Self::Nps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Likert => "likert",
            Self::Text => "text",
            Self::MultipleChoice => "multiple_choice",
            Self::SingleChoice => "single_choice",
            Self::Rating => "rating",
            Self::YesNo => "yes_no",
            Self::Nps => "nps",
        }
    }
}

impl FromStr for QuestionType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match Self::ALL.into_iter().find(|question_type| question_type.as_str() == s) {
            Some(question_type) => Ok(question_type),
            None => Err(CoreError::InvalidQuestionType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
