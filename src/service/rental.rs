// src/service/rental.rs

use thiserror::Error;

use crate::db::{DbError, RentalRepository, RepositoryError};
use crate::domain::{QueryParameterSet, RentalRecord};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("rental {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Storage(DbError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ServiceError::NotFound(id),
            RepositoryError::Storage(e) => ServiceError::Storage(e),
        }
    }
}

/// Entry point for the transport layer. Data is returned as the repository
/// produced it.
#[derive(Clone, Debug)]
pub struct RentalLookupService {
    rentals: RentalRepository,
}

impl RentalLookupService {
    pub fn new(rentals: RentalRepository) -> Self {
        Self { rentals }
    }

    pub fn get_by_id(&self, rental_id: i64) -> Result<RentalRecord, ServiceError> {
        self.rentals.find_by_id(rental_id).map_err(|err| {
            match &err {
                RepositoryError::NotFound(_) => {
                    tracing::debug!(rental_id, "Rental not found")
                }
                RepositoryError::Storage(e) => {
                    tracing::error!(rental_id, error = %e, "Error getting rental by ID")
                }
            }
            ServiceError::from(err)
        })
    }

    pub fn list(&self, params: &QueryParameterSet) -> Result<Vec<RentalRecord>, ServiceError> {
        let rentals = self.rentals.find_many(params).map_err(|err| {
            tracing::error!(error = %err, "Error getting rentals");
            ServiceError::from(err)
        })?;

        tracing::debug!(count = rentals.len(), "Rentals found");
        Ok(rentals)
    }
}
