use axum::extract::State;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::{ApiPath, ApiQuery};
use crate::utils::pagination::PageQuery;
use crate::utils::response::success;

pub async fn list_verifications(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Response, AppError> {
    let page = state.verification.verifications(query.into()).await?;

    Ok(success(page, "Verifications retrieved").into_response())
}

pub async fn get_verification(
    State(state): State<AppState>,
    ApiPath(verification_id): ApiPath<Uuid>,
) -> Result<Response, AppError> {
    let record = state
        .verification
        .verification(verification_id)
        .await?
        .ok_or_else(|| AppError::not_found("Verification", verification_id))?;

    Ok(success(record, "Verification retrieved").into_response())
}
