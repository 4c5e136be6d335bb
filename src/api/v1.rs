// src/api/v1.rs
//
// JSON shapes served under /v1.

use serde::{Deserialize, Serialize};

use crate::domain::RentalRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub make: String,
    pub model: String,
    pub year: i64,
    pub length: f64,
    pub sleeps: i64,
    pub primary_image_url: String,
    pub price: Price,
    pub location: Location,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub day: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl From<RentalRecord> for Rental {
    fn from(r: RentalRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            kind: r.kind,
            make: r.vehicle_make,
            model: r.vehicle_model,
            year: r.vehicle_year,
            length: r.vehicle_length,
            sleeps: r.sleeps,
            primary_image_url: r.primary_image_url,
            price: Price {
                day: r.price_per_day,
            },
            location: Location {
                city: r.home_city,
                state: r.home_state,
                zip: r.home_zip,
                country: r.home_country,
                lat: r.lat,
                lng: r.lng,
            },
            user: User {
                id: r.user.id,
                first_name: r.user.first_name,
                last_name: r.user.last_name,
            },
        }
    }
}
