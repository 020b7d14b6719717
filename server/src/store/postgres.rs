//! `PostgreSQL` implementation of the storage traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{StationStore, TicketStore, TransportStore, VerificationStore};
use crate::models::station::StationRow;
use crate::models::ticket::TicketRow;
use crate::models::{Station, Ticket, Transport, VerificationRecord};
use crate::utils::error::AppResult;
use crate::utils::pagination::{Page, PageRequest};

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl TicketStore for PostgresStore {
    async fn get_ticket(&self, id: Uuid) -> AppResult<Option<Ticket>> {
        let row: Option<TicketRow> = sqlx::query_as(
            "SELECT id, ticket_type_id, created_at, activated_at, expires_at
             FROM tickets
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let zones: Vec<(i32,)> = sqlx::query_as(
            "SELECT area_id FROM ticket_areas WHERE ticket_id = $1 ORDER BY area_id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(
            row.into_ticket(zones.into_iter().map(|(area_id,)| area_id).collect()),
        ))
    }

    async fn activate(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE tickets SET activated_at = $2
             WHERE id = $1 AND activated_at IS NULL",
        )
        .bind(id)
        .bind(at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}

#[async_trait]
impl TransportStore for PostgresStore {
    async fn get_transport(&self, id: i32) -> AppResult<Option<Transport>> {
        let transport: Option<Transport> = sqlx::query_as(
            "SELECT id, carrier_number, route_id FROM transports WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transport)
    }
}

#[async_trait]
impl StationStore for PostgresStore {
    async fn stations_for_route(&self, route_id: i32) -> AppResult<Vec<Station>> {
        let rows: Vec<StationRow> = sqlx::query_as(
            "SELECT s.id AS station_id, s.name AS station_name, s.latitude, s.longitude,
                    a.id AS area_id, a.name AS area_name, a.description AS area_description
             FROM route_stations rs
             JOIN stations s ON s.id = rs.station_id
             JOIN areas a ON a.id = s.area_id
             WHERE rs.route_id = $1
             ORDER BY s.id",
        )
        .bind(route_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Station::from).collect())
    }
}

#[async_trait]
impl VerificationStore for PostgresStore {
    async fn create(&self, record: &VerificationRecord) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO ticket_verifications
                (id, ticket_id, transport_id, station_id, verified_at, is_verified)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(record.id)
        .bind(record.ticket_id)
        .bind(record.transport_id)
        .bind(record.station_id)
        .bind(record.verified_at)
        .bind(record.is_verified)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<VerificationRecord>> {
        let record: Option<VerificationRecord> = sqlx::query_as(
            "SELECT id, ticket_id, transport_id, station_id, verified_at, is_verified
             FROM ticket_verifications
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn history_for(&self, ticket_id: Uuid) -> AppResult<Vec<VerificationRecord>> {
        let history: Vec<VerificationRecord> = sqlx::query_as(
            "SELECT id, ticket_id, transport_id, station_id, verified_at, is_verified
             FROM ticket_verifications
             WHERE ticket_id = $1
             ORDER BY verified_at DESC",
        )
        .bind(ticket_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(history)
    }

    async fn page(&self, request: PageRequest) -> AppResult<Page<VerificationRecord>> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ticket_verifications")
            .fetch_one(&self.pool)
            .await?;

        let items: Vec<VerificationRecord> = sqlx::query_as(
            "SELECT id, ticket_id, transport_id, station_id, verified_at, is_verified
             FROM ticket_verifications
             ORDER BY verified_at DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(to_i64(request.limit()))
        .bind(to_i64(request.offset()))
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(
            items,
            request,
            u64::try_from(total).unwrap_or_default(),
        ))
    }
}
