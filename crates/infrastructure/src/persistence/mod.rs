//! Persistence module
//!
//! File-based storage for the unit preference.

mod error;
pub mod json_preference_store;

pub use json_preference_store::JsonPreferenceStore;
