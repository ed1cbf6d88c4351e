pub mod tenant_id;
pub mod user_id;
