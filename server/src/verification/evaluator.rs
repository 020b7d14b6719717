use chrono::{DateTime, Utc};

use crate::models::{Station, Ticket};

pub const TICKET_EXPIRED: &str = "Ticket expired";
pub const ZONE_NOT_COVERED: &str = "Ticket does not contain the zone";

/// Business decision for a ticket presented at a resolved station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Expired,
    ZoneMismatch,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Verdict::Valid => None,
            Verdict::Expired => Some(TICKET_EXPIRED),
            Verdict::ZoneMismatch => Some(ZONE_NOT_COVERED),
        }
    }
}

/// Expiry is checked before zone coverage and wins when both fail.
pub fn evaluate(ticket: &Ticket, station: &Station, now: DateTime<Utc>) -> Verdict {
    let expired = ticket.is_expired_at(now);
    let in_zone = ticket.covers_zone(station.area.id);

    if expired {
        Verdict::Expired
    } else if !in_zone {
        Verdict::ZoneMismatch
    } else {
        Verdict::Valid
    }
}
