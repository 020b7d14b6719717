use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A fare zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub area: Area,
}

/// Flattened station/area join row.
#[derive(Debug, Clone, FromRow)]
pub struct StationRow {
    pub station_id: i32,
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub area_id: i32,
    pub area_name: String,
    pub area_description: Option<String>,
}

impl From<StationRow> for Station {
    fn from(row: StationRow) -> Self {
        Station {
            id: row.station_id,
            name: row.station_name,
            latitude: row.latitude,
            longitude: row.longitude,
            area: Area {
                id: row.area_id,
                name: row.area_name,
                description: row.area_description,
            },
        }
    }
}
