//! Application layer - Use cases and orchestration
//!
//! Contains the port definitions and the weather session that drives
//! lookups and the unit preference. Orchestrates domain objects and
//! infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
