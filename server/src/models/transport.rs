use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Transport {
    pub id: i32,
    pub carrier_number: String,
    pub route_id: i32,
}
