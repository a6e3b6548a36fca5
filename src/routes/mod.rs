mod completion;
mod error;
mod geocode;
mod health_check;
mod location;
mod reports;

pub use completion::{EMPTY_OUTPUT_PLACEHOLDER, complete};
pub use error::ApiError;
pub use geocode::{forward_geocode, reverse_geocode};
pub use health_check::health_check;
pub use location::{LocationResponse, get_location, reset_location, set_location};
pub use reports::generate;
