use std::collections::{BTreeMap, BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StationStore, TicketStore, TransportStore, VerificationStore};
use crate::models::{Station, Ticket, Transport, VerificationRecord};
use crate::utils::error::AppResult;
use crate::utils::pagination::{Page, PageRequest};

#[derive(Default)]
struct Inner {
    tickets: HashMap<Uuid, Ticket>,
    transports: HashMap<i32, Transport>,
    stations: BTreeMap<i32, Station>,
    routes: HashMap<i32, BTreeSet<i32>>,
    verifications: Vec<VerificationRecord>,
}

/// Process-local store implementing every storage trait.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_ticket(&self, ticket: Ticket) {
        self.inner.write().await.tickets.insert(ticket.id, ticket);
    }

    pub async fn insert_transport(&self, transport: Transport) {
        self.inner
            .write()
            .await
            .transports
            .insert(transport.id, transport);
    }

    pub async fn insert_station(&self, station: Station) {
        self.inner.write().await.stations.insert(station.id, station);
    }

    pub async fn assign_station(&self, route_id: i32, station_id: i32) {
        self.inner
            .write()
            .await
            .routes
            .entry(route_id)
            .or_default()
            .insert(station_id);
    }

    pub async fn verification_count(&self) -> usize {
        self.inner.read().await.verifications.len()
    }
}

fn newest_first(records: &mut [VerificationRecord]) {
    records.sort_by(|a, b| b.verified_at.cmp(&a.verified_at));
}

#[async_trait]
impl TicketStore for MemoryStore {
    async fn get_ticket(&self, id: Uuid) -> AppResult<Option<Ticket>> {
        Ok(self.inner.read().await.tickets.get(&id).cloned())
    }

    async fn activate(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.tickets.get_mut(&id) {
            Some(ticket) if ticket.activated_at.is_none() => {
                ticket.activated_at = Some(at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl TransportStore for MemoryStore {
    async fn get_transport(&self, id: i32) -> AppResult<Option<Transport>> {
        Ok(self.inner.read().await.transports.get(&id).cloned())
    }
}

#[async_trait]
impl StationStore for MemoryStore {
    async fn stations_for_route(&self, route_id: i32) -> AppResult<Vec<Station>> {
        let inner = self.inner.read().await;
        let Some(station_ids) = inner.routes.get(&route_id) else {
            return Ok(Vec::new());
        };

        // BTreeSet iteration keeps station id order
        Ok(station_ids
            .iter()
            .filter_map(|id| inner.stations.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl VerificationStore for MemoryStore {
    async fn create(&self, record: &VerificationRecord) -> AppResult<()> {
        self.inner.write().await.verifications.push(record.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<VerificationRecord>> {
        Ok(self
            .inner
            .read()
            .await
            .verifications
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn history_for(&self, ticket_id: Uuid) -> AppResult<Vec<VerificationRecord>> {
        let mut history: Vec<_> = self
            .inner
            .read()
            .await
            .verifications
            .iter()
            .filter(|r| r.ticket_id == ticket_id)
            .cloned()
            .collect();
        newest_first(&mut history);
        Ok(history)
    }

    async fn page(&self, request: PageRequest) -> AppResult<Page<VerificationRecord>> {
        let mut all = self.inner.read().await.verifications.clone();
        newest_first(&mut all);
        Ok(Page::from_vec(all, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Area;
    use chrono::TimeZone;

    fn station(id: i32) -> Station {
        Station {
            id,
            name: format!("Station {}", id),
            latitude: 49.8,
            longitude: 24.0,
            area: Area {
                id: 1,
                name: "A".into(),
                description: None,
            },
        }
    }

    #[tokio::test]
    async fn test_route_stations_come_back_in_id_order() {
        let store = MemoryStore::new();
        for id in [30, 10, 20] {
            store.insert_station(station(id)).await;
            store.assign_station(5, id).await;
        }
        store.insert_station(station(40)).await;
        store.assign_station(6, 40).await;

        let ids: Vec<i32> = store
            .stations_for_route(5)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![10, 20, 30]);
        assert!(store.stations_for_route(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_activate_only_once() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();
        store
            .insert_ticket(Ticket {
                id,
                ticket_type_id: Uuid::new_v4(),
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                activated_at: None,
                expires_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
                zones: vec![1],
            })
            .await;

        let first = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap();

        assert!(store.activate(id, first).await.unwrap());
        assert!(!store.activate(id, second).await.unwrap());
        assert!(!store.activate(Uuid::new_v4(), second).await.unwrap());

        let ticket = store.get_ticket(id).await.unwrap().unwrap();
        assert_eq!(ticket.activated_at, Some(first));
    }
}
