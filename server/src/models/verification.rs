use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One immutable entry in a ticket's verification history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct VerificationRecord {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub transport_id: i32,
    pub station_id: i32,
    pub verified_at: DateTime<Utc>,
    pub is_verified: bool,
}
