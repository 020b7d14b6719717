use std::sync::Arc;

use uuid::Uuid;

use super::evaluator::evaluate;
use super::lifecycle::{Activation, TicketLifecycle};
use super::outcome::{LookupFailure, VerifyResult};
use super::recorder::VerificationRecorder;
use super::resolver::{FareZoneResolver, Position};
use crate::models::{Ticket, VerificationRecord};
use crate::store::{StationStore, TicketStore, TransportStore, VerificationStore};
use crate::utils::clock::Clock;
use crate::utils::error::AppResult;
use crate::utils::pagination::{Page, PageRequest};

/// Runs resolver, evaluator and recorder for one verification request.
///
/// Every collaborator is passed in explicitly; the service holds no state of
/// its own beyond these handles.
pub struct VerificationService {
    tickets: Arc<dyn TicketStore>,
    transports: Arc<dyn TransportStore>,
    lifecycle: TicketLifecycle,
    resolver: FareZoneResolver,
    recorder: VerificationRecorder,
    clock: Arc<dyn Clock>,
}

impl VerificationService {
    pub fn new(
        tickets: Arc<dyn TicketStore>,
        transports: Arc<dyn TransportStore>,
        stations: Arc<dyn StationStore>,
        verifications: Arc<dyn VerificationStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            lifecycle: TicketLifecycle::new(tickets.clone()),
            tickets,
            transports,
            resolver: FareZoneResolver::new(stations),
            recorder: VerificationRecorder::new(verifications),
            clock,
        }
    }

    /// Wires every collaborator to the same store.
    pub fn with_store<S>(store: Arc<S>, clock: Arc<dyn Clock>) -> Self
    where
        S: TicketStore + TransportStore + StationStore + VerificationStore + 'static,
    {
        Self::new(store.clone(), store.clone(), store.clone(), store, clock)
    }

    /// Business rejections come back as data; only store failures are errors.
    pub async fn verify_ticket(
        &self,
        ticket_id: Uuid,
        transport_id: i32,
        longitude: f64,
        latitude: f64,
    ) -> AppResult<VerifyResult> {
        let now = self.clock.now();

        let Some(mut ticket) = self.tickets.get_ticket(ticket_id).await? else {
            return Ok(self.reject(ticket_id, LookupFailure::Ticket));
        };

        self.lifecycle.ensure_activated(&mut ticket, now).await?;

        let Some(transport) = self.transports.get_transport(transport_id).await? else {
            return Ok(self.reject(ticket_id, LookupFailure::Transport));
        };

        let position = Position::new(longitude, latitude);
        let Some(station) = self
            .resolver
            .nearest_station(transport.route_id, position)
            .await?
        else {
            return Ok(self.reject(ticket_id, LookupFailure::Station));
        };

        let verdict = evaluate(&ticket, &station, now);
        self.recorder
            .record(ticket.id, transport.id, station.id, verdict.is_valid(), now)
            .await?;

        tracing::info!(
            ticket_id = %ticket_id,
            transport_id,
            station_id = station.id,
            area_id = station.area.id,
            valid = verdict.is_valid(),
            reason = verdict.reason().unwrap_or(""),
            "Ticket verified"
        );

        Ok(verdict.into())
    }

    fn reject(&self, ticket_id: Uuid, failure: LookupFailure) -> VerifyResult {
        tracing::warn!(
            ticket_id = %ticket_id,
            reason = failure.reason(),
            "Verification rejected before evaluation"
        );
        failure.into()
    }

    pub async fn get_ticket(&self, ticket_id: Uuid) -> AppResult<Option<Ticket>> {
        self.tickets.get_ticket(ticket_id).await
    }

    /// `None` when the ticket does not exist.
    pub async fn activate_ticket(&self, ticket_id: Uuid) -> AppResult<Option<Activation>> {
        let Some(mut ticket) = self.tickets.get_ticket(ticket_id).await? else {
            return Ok(None);
        };

        let activation = self
            .lifecycle
            .ensure_activated(&mut ticket, self.clock.now())
            .await?;
        Ok(Some(activation))
    }

    pub async fn history(
        &self,
        ticket_id: Uuid,
        request: PageRequest,
    ) -> AppResult<Page<VerificationRecord>> {
        self.recorder.history_page(ticket_id, request).await
    }

    pub async fn verifications(&self, request: PageRequest) -> AppResult<Page<VerificationRecord>> {
        self.recorder.page(request).await
    }

    pub async fn verification(&self, id: Uuid) -> AppResult<Option<VerificationRecord>> {
        self.recorder.get(id).await
    }
}
