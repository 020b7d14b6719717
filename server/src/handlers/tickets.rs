use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Ticket, TicketState};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::{ApiJson, ApiPath, ApiQuery};
use crate::utils::pagination::PageQuery;
use crate::utils::response::{no_content, success};
use crate::verification::VerifyResult;

#[derive(Debug, Deserialize)]
pub struct VerifyTicketRequest {
    #[serde(alias = "transportId")]
    pub transport_id: i32,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub id: Uuid,
    pub ticket_type_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub activated_at: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
    pub state: TicketState,
    pub zones: Vec<i32>,
}

impl From<Ticket> for TicketResponse {
    fn from(ticket: Ticket) -> Self {
        Self {
            state: ticket.state(),
            id: ticket.id,
            ticket_type_id: ticket.ticket_type_id,
            created_at: ticket.created_at,
            activated_at: ticket.activated_at,
            expires_at: ticket.expires_at,
            zones: ticket.zones,
        }
    }
}

pub async fn get_ticket(
    State(state): State<AppState>,
    ApiPath(ticket_id): ApiPath<Uuid>,
) -> Result<Response, AppError> {
    tracing::info!(ticket_id = %ticket_id, "get_ticket");

    let ticket = state
        .verification
        .get_ticket(ticket_id)
        .await?
        .ok_or_else(|| AppError::not_found("Ticket", ticket_id))?;

    Ok(success(TicketResponse::from(ticket), "Ticket retrieved").into_response())
}

pub async fn activate_ticket(
    State(state): State<AppState>,
    ApiPath(ticket_id): ApiPath<Uuid>,
) -> Result<Response, AppError> {
    tracing::info!(ticket_id = %ticket_id, "activate_ticket");

    state
        .verification
        .activate_ticket(ticket_id)
        .await?
        .ok_or_else(|| AppError::not_found("Ticket", ticket_id))?;

    Ok(no_content())
}

/// Returns the verification result as-is; rejections are not HTTP errors.
pub async fn verify_ticket(
    State(state): State<AppState>,
    ApiPath(ticket_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<VerifyTicketRequest>,
) -> Result<Json<VerifyResult>, AppError> {
    tracing::info!(
        ticket_id = %ticket_id,
        transport_id = request.transport_id,
        "verify_ticket"
    );

    let result = state
        .verification
        .verify_ticket(
            ticket_id,
            request.transport_id,
            request.longitude,
            request.latitude,
        )
        .await?;

    Ok(Json(result))
}

pub async fn get_verification_history(
    State(state): State<AppState>,
    ApiPath(ticket_id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Response, AppError> {
    tracing::info!(ticket_id = %ticket_id, "get_verification_history");

    let page = state
        .verification
        .history(ticket_id, query.into())
        .await?;

    Ok(success(page, "Verification history retrieved").into_response())
}
