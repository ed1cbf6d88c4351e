use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordInvitationsRequest {
    pub count: i64,
}
