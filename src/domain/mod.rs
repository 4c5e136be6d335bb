pub mod params;
pub mod rental;
pub mod sort;

pub use params::{QueryParameterSet, ValidationError};
pub use rental::{RentalOwner, RentalRecord};
pub use sort::SortColumn;
