pub mod connection;
pub mod query;
pub mod rentals;

pub use connection::{init_db, Database, DbError};
pub use rentals::{RentalRepository, RepositoryError};
