use std::time::Duration;

use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use thiserror::Error;

use crate::db::connection::{Database, DbError};
use crate::db::query::{build_rental_query, RENTAL_SELECT};
use crate::domain::{QueryParameterSet, RentalOwner, RentalRecord};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("not found rental with id {0}")]
    NotFound(i64),

    #[error(transparent)]
    Storage(#[from] DbError),
}

/// Reads rentals from storage. One query per call, no caching, no retries.
#[derive(Clone, Debug)]
pub struct RentalRepository {
    db: Database,
    query_timeout: Option<Duration>,
}

impl RentalRepository {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            query_timeout: None,
        }
    }

    /// Interrupt any single query that runs longer than `timeout`.
    pub fn with_query_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn find_by_id(&self, rental_id: i64) -> Result<RentalRecord, RepositoryError> {
        tracing::debug!(rental_id, "Getting rental by ID");

        let sql = format!("{RENTAL_SELECT}\nWHERE r.id = ?1");
        let rental = self.db.with_deadline(self.query_timeout, |conn| {
            conn.query_row(&sql, params![rental_id], map_rental_row)
                .optional()
        })?;

        rental.ok_or(RepositoryError::NotFound(rental_id))
    }

    /// An empty result is `Ok(vec![])`, never an error.
    pub fn find_many(
        &self,
        params: &QueryParameterSet,
    ) -> Result<Vec<RentalRecord>, RepositoryError> {
        let query = build_rental_query(params);
        tracing::debug!(sql = %query.sql, args = ?query.args, "Finding rentals");

        let rentals = self.db.with_deadline(self.query_timeout, |conn| {
            let mut stmt = conn.prepare(&query.sql)?;
            let rows = stmt.query_map(params_from_iter(query.args.iter()), map_rental_row)?;
            let rentals = rows.collect::<rusqlite::Result<Vec<_>>>();
            rentals
        })?;

        Ok(rentals)
    }
}

fn map_rental_row(row: &Row<'_>) -> rusqlite::Result<RentalRecord> {
    Ok(RentalRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        kind: row.get(3)?,
        description: row.get(4)?,
        sleeps: row.get(5)?,
        price_per_day: row.get(6)?,
        home_city: row.get(7)?,
        home_state: row.get(8)?,
        home_zip: row.get(9)?,
        home_country: row.get(10)?,
        vehicle_make: row.get(11)?,
        vehicle_model: row.get(12)?,
        vehicle_year: row.get(13)?,
        vehicle_length: row.get(14)?,
        created: row.get(15)?,
        updated: row.get(16)?,
        lat: row.get(17)?,
        lng: row.get(18)?,
        primary_image_url: row.get(19)?,
        user: RentalOwner {
            id: row.get(20)?,
            first_name: row.get(21)?,
            last_name: row.get(22)?,
        },
    })
}
