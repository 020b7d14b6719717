//! Storage collaborators of the verification engine.
//!
//! Each trait covers one concern so the engine can be wired against
//! Postgres in production and the in-memory store in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Station, Ticket, Transport, VerificationRecord};
use crate::utils::error::AppResult;
use crate::utils::pagination::{Page, PageRequest};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

#[async_trait]
pub trait TicketStore: Send + Sync {
    async fn get_ticket(&self, id: Uuid) -> AppResult<Option<Ticket>>;

    /// Stamps the activation time if the ticket has none yet.
    ///
    /// Returns `true` only for the call that performed the transition.
    async fn activate(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<bool>;
}

#[async_trait]
pub trait TransportStore: Send + Sync {
    async fn get_transport(&self, id: i32) -> AppResult<Option<Transport>>;
}

#[async_trait]
pub trait StationStore: Send + Sync {
    /// Stations served by the route, areas populated, ordered by station id.
    async fn stations_for_route(&self, route_id: i32) -> AppResult<Vec<Station>>;
}

#[async_trait]
pub trait VerificationStore: Send + Sync {
    async fn create(&self, record: &VerificationRecord) -> AppResult<()>;

    async fn get(&self, id: Uuid) -> AppResult<Option<VerificationRecord>>;

    /// All records for a ticket, most recent first.
    async fn history_for(&self, ticket_id: Uuid) -> AppResult<Vec<VerificationRecord>>;

    /// All records across tickets, most recent first.
    async fn page(&self, request: PageRequest) -> AppResult<Page<VerificationRecord>>;
}
