use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::{Ticket, TicketState};
use crate::store::TicketStore;
use crate::utils::error::{AppError, AppResult};

/// Result of driving a ticket through `Unactivated -> Activated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Activated { at: DateTime<Utc> },
    AlreadyActive { since: DateTime<Utc> },
}

impl Activation {
    pub fn activated_at(&self) -> DateTime<Utc> {
        match *self {
            Activation::Activated { at } => at,
            Activation::AlreadyActive { since } => since,
        }
    }
}

pub struct TicketLifecycle {
    tickets: Arc<dyn TicketStore>,
}

impl TicketLifecycle {
    pub fn new(tickets: Arc<dyn TicketStore>) -> Self {
        Self { tickets }
    }

    /// Activates the ticket if it is not active yet and updates `ticket` to
    /// match what the store now holds. Repeated calls are no-ops.
    pub async fn ensure_activated(
        &self,
        ticket: &mut Ticket,
        now: DateTime<Utc>,
    ) -> AppResult<Activation> {
        if let TicketState::Activated { at } = ticket.state() {
            return Ok(Activation::AlreadyActive { since: at });
        }

        if self.tickets.activate(ticket.id, now).await? {
            ticket.activated_at = Some(now);
            tracing::info!(
                ticket_id = %ticket.id,
                activated_at = %now,
                "Ticket transitioned Unactivated -> Activated"
            );
            return Ok(Activation::Activated { at: now });
        }

        // Another request activated it first
        let stored = self
            .tickets
            .get_ticket(ticket.id)
            .await?
            .ok_or_else(|| AppError::not_found("Ticket", ticket.id))?;
        let since = stored.activated_at.ok_or_else(|| {
            AppError::InternalServerError(format!(
                "ticket {} refused activation but has no activation time",
                ticket.id
            ))
        })?;
        ticket.activated_at = Some(since);
        tracing::debug!(ticket_id = %ticket.id, "Ticket was activated concurrently");

        Ok(Activation::AlreadyActive { since })
    }
}
