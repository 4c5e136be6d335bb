pub mod rental;

pub use rental::{RentalLookupService, ServiceError};
