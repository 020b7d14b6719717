#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use eticket_server::models::{Area, Station, Ticket, Transport};
use eticket_server::store::MemoryStore;
use eticket_server::utils::clock::FixedClock;
use eticket_server::verification::VerificationService;

pub const ROUTE: i32 = 1;
pub const EMPTY_ROUTE: i32 = 2;
pub const BUS: i32 = 100;
pub const BUS_ON_EMPTY_ROUTE: i32 = 200;

pub const ZONE_A: i32 = 1;
pub const ZONE_B: i32 = 2;
pub const ZONE_C: i32 = 3;

/// (longitude, latitude) resolving to station 10 in zone A.
pub const NEAR_ZONE_A: (f64, f64) = (0.5, 50.0);
/// (longitude, latitude) resolving to station 20 in zone C.
pub const NEAR_ZONE_C: (f64, f64) = (50.0, 0.5);

pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn area(id: i32) -> Area {
    Area {
        id,
        name: format!("Zone {}", id),
        description: None,
    }
}

pub fn ticket(expires_at: DateTime<Utc>, zones: Vec<i32>) -> Ticket {
    Ticket {
        id: Uuid::new_v4(),
        ticket_type_id: Uuid::new_v4(),
        created_at: at(2023, 12, 1),
        activated_at: None,
        expires_at,
        zones,
    }
}

/// Route 1 has station 10 (zone A) and station 20 (zone C) with mirrored
/// coordinates. Route 2 has none.
pub async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());

    store
        .insert_station(Station {
            id: 10,
            name: "Rynok".into(),
            latitude: 1.0,
            longitude: 100.0,
            area: area(ZONE_A),
        })
        .await;
    store
        .insert_station(Station {
            id: 20,
            name: "Airport".into(),
            latitude: 100.0,
            longitude: 1.0,
            area: area(ZONE_C),
        })
        .await;
    store.assign_station(ROUTE, 10).await;
    store.assign_station(ROUTE, 20).await;

    store
        .insert_transport(Transport {
            id: BUS,
            carrier_number: "BC 1234".into(),
            route_id: ROUTE,
        })
        .await;
    store
        .insert_transport(Transport {
            id: BUS_ON_EMPTY_ROUTE,
            carrier_number: "BC 5678".into(),
            route_id: EMPTY_ROUTE,
        })
        .await;

    store
}

pub fn service(store: Arc<MemoryStore>, now: DateTime<Utc>) -> VerificationService {
    VerificationService::with_store(store, Arc::new(FixedClock::new(now)))
}
