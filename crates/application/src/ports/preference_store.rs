//! Unit preference storage port

use async_trait::async_trait;
use domain::UnitPreference;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisting the user's temperature unit choice
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Load the stored preference, `None` if nothing was stored yet
    async fn load(&self) -> Result<Option<UnitPreference>, ApplicationError>;

    /// Store the preference, replacing any previous value
    async fn save(&self, units: UnitPreference) -> Result<(), ApplicationError>;
}
