use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A purchased ticket together with the fare zones it was bought for.
///
/// The zone set is fixed at purchase time. The only field that ever changes
/// afterwards is `activated_at`, and only once.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: Uuid,
    pub ticket_type_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub activated_at: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
    pub zones: Vec<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TicketState {
    Unactivated,
    Activated { at: DateTime<Utc> },
}

impl Ticket {
    pub fn state(&self) -> TicketState {
        match self.activated_at {
            Some(at) => TicketState::Activated { at },
            None => TicketState::Unactivated,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn covers_zone(&self, area_id: i32) -> bool {
        self.zones.contains(&area_id)
    }
}

/// Row shape of the `tickets` table; zones live in `ticket_areas`.
#[derive(Debug, Clone, FromRow)]
pub struct TicketRow {
    pub id: Uuid,
    pub ticket_type_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub activated_at: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
}

impl TicketRow {
    pub fn into_ticket(self, zones: Vec<i32>) -> Ticket {
        Ticket {
            id: self.id,
            ticket_type_id: self.ticket_type_id,
            created_at: self.created_at,
            activated_at: self.activated_at,
            expires_at: self.expires_at,
            zones,
        }
    }
}
