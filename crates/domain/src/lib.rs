//! Domain layer for the weather lookup
//!
//! Contains the weather entities, value objects and the two pure operations
//! the rest of the workspace builds on: daily forecast aggregation and
//! temperature conversion for display. No I/O happens here.

pub mod aggregation;
pub mod conversion;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use aggregation::{aggregate_daily, aggregate_daily_local, aggregate_with_boundary};
pub use conversion::{convert_temperature, display_temperature};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
