//! Invitation and response counts for a survey.
//!
//! The completion rate is never stored; it is derived from the two counts
//! whenever it is read.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// Percentage of invited participants who responded.
///
/// Returns 0 when nobody has been invited.
pub fn completion_rate(responses: i64, total_invited: i64) -> f64 {
    if total_invited <= 0 {
        return 0.0;
    }
    responses as f64 / total_invited as f64 * 100.0
}

/// Response counts for one survey.
///
/// Fields are private so `responses <= total_invited` holds for every value
/// that can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ResponseAggregate {
    responses: i64,
    total_invited: i64,
}

impl ResponseAggregate {
    #[track_caller]
    pub fn new(responses: i64, total_invited: i64) -> CoreResult<Self> {
        if responses < 0 || total_invited < 0 {
            return Err(CoreError::Validation {
                message: format!(
                    "Response counts cannot be negative (responses={}, total_invited={})",
                    responses, total_invited
                ),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if responses > total_invited {
            return Err(CoreError::Validation {
                message: format!(
                    "responses ({}) cannot exceed total_invited ({})",
                    responses, total_invited
                ),
                field: Some("responses".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            responses,
            total_invited,
        })
    }

    pub fn responses(&self) -> i64 {
        self.responses
    }

    pub fn total_invited(&self) -> i64 {
        self.total_invited
    }

    pub fn completion_rate(&self) -> f64 {
        completion_rate(self.responses, self.total_invited)
    }

    /// Add `count` invitations.
    #[track_caller]
    pub fn with_invitations(self, count: i64) -> CoreResult<Self> {
        if count <= 0 {
            return Err(CoreError::Validation {
                message: format!("Invitation count must be positive, got {}", count),
                field: Some("count".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let total_invited =
            self.total_invited
                .checked_add(count)
                .ok_or_else(|| CoreError::Validation {
                    message: "Invitation count overflows".to_string(),
                    field: Some("count".into()),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        Ok(Self {
            responses: self.responses,
            total_invited,
        })
    }

    /// Record a single response.
    #[track_caller]
    pub fn with_response(self) -> CoreResult<Self> {
        if self.responses >= self.total_invited {
            return Err(CoreError::Validation {
                message: format!(
                    "All {} invited participants have already responded",
                    self.total_invited
                ),
                field: Some("responses".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            responses: self.responses + 1,
            total_invited: self.total_invited,
        })
    }
}
