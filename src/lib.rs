pub mod classifier;
pub mod completion;
pub mod configuration;
pub mod domain;
pub mod drafter;
pub mod errors;
pub mod geocoding;
pub mod pipeline;
pub mod routes;
pub mod startup;
pub mod telemetry;
