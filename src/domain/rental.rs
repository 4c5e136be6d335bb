// src/domain/rental.rs

use chrono::NaiveDateTime;

/// A rental listing joined with its owner, as read from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalRecord {
    pub id: i64,
    pub user_id: i64,

    pub name: String,
    pub description: String,
    pub kind: String, // `type` column

    // Vehicle
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i64,
    pub vehicle_length: f64,
    pub sleeps: i64,

    pub price_per_day: i64,

    // Home location
    pub home_city: String,
    pub home_state: String,
    pub home_zip: String,
    pub home_country: String,
    pub lat: f64,
    pub lng: f64,

    pub primary_image_url: String,

    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,

    pub user: RentalOwner,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RentalOwner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}
