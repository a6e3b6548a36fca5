mod address_query;
mod category;
mod coordinate;
mod location_state;
mod problem_text;
mod report;
#[cfg(test)]
mod test_data;

pub use address_query::{AddressQuery, AddressQueryError};
pub use category::Category;
pub use coordinate::{Coordinate, CoordinateError};
pub use location_state::LocationState;
pub use problem_text::{ProblemText, ProblemTextError};
pub use report::ProblemReport;
