use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::VerificationRecord;
use crate::store::VerificationStore;
use crate::utils::error::AppResult;
use crate::utils::pagination::{Page, PageRequest};

/// Append-only verification history.
pub struct VerificationRecorder {
    store: Arc<dyn VerificationStore>,
}

impl VerificationRecorder {
    pub fn new(store: Arc<dyn VerificationStore>) -> Self {
        Self { store }
    }

    pub async fn record(
        &self,
        ticket_id: Uuid,
        transport_id: i32,
        station_id: i32,
        is_verified: bool,
        verified_at: DateTime<Utc>,
    ) -> AppResult<VerificationRecord> {
        let record = VerificationRecord {
            id: Uuid::new_v4(),
            ticket_id,
            transport_id,
            station_id,
            verified_at,
            is_verified,
        };

        self.store.create(&record).await?;
        tracing::info!(
            verification_id = %record.id,
            ticket_id = %ticket_id,
            transport_id,
            station_id,
            is_verified,
            "Verification recorded"
        );

        Ok(record)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Option<VerificationRecord>> {
        self.store.get(id).await
    }

    pub async fn history_for(&self, ticket_id: Uuid) -> AppResult<Vec<VerificationRecord>> {
        self.store.history_for(ticket_id).await
    }

    pub async fn history_page(
        &self,
        ticket_id: Uuid,
        request: PageRequest,
    ) -> AppResult<Page<VerificationRecord>> {
        let history = self.store.history_for(ticket_id).await?;
        Ok(Page::from_vec(history, request))
    }

    pub async fn page(&self, request: PageRequest) -> AppResult<Page<VerificationRecord>> {
        self.store.page(request).await
    }
}
