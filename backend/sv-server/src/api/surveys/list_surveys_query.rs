use serde::Deserialize;

/// Query parameters for listing surveys
#[derive(Debug, Deserialize)]
pub struct ListSurveysQuery {
    /// draft, published or archived
    pub status: Option<String>,
}
