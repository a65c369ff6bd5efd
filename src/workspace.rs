//! Production entity workspace.
//!
//! A production entity is the tenant operating the workspace: it owns the
//! product catalog, the logbook, and the subscription being renewed. The
//! dashboard summary is a pure read model over those stores.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::ProductStore,
    error::{PlatformError, Result},
    logbook::Logbook,
    subscription::SubscriptionRecord,
};

/// Unique identifier for a production entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Creates a new entity ID after validation.
    ///
    /// # Errors
    ///
    /// Returns error if the ID is empty, exceeds 64 characters, or contains
    /// characters other than alphanumerics, hyphens, and underscores.
    pub fn new<S: Into<String>>(id: S) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(PlatformError::InvalidEntityId("entity_id cannot be empty".into()));
        }
        if id.len() > 64 {
            return Err(PlatformError::InvalidEntityId(
                "entity_id must be 64 characters or less".into(),
            ));
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(PlatformError::InvalidEntityId(
                "entity_id can only contain alphanumeric characters, hyphens, and underscores"
                    .into(),
            ));
        }
        Ok(Self(id))
    }

    /// Returns the inner string reference.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The tenant operating a workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionEntity {
    /// Unique entity identifier.
    pub id: EntityId,
    /// Business name.
    pub name: String,
    /// Current subscription.
    pub subscription: SubscriptionRecord,
}

/// Dashboard figures shown on the workspace landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Products in the catalog.
    pub product_count: usize,
    /// Entries in the logbook.
    pub logbook_entry_count: usize,
    /// Days until the subscription expires; negative when already expired.
    pub days_until_expiry: i64,
}

impl DashboardSummary {
    /// Computes the summary from the entity's stores as of `today`.
    #[must_use]
    pub fn compute(
        entity: &ProductionEntity,
        products: &ProductStore,
        logbook: &Logbook,
        today: NaiveDate,
    ) -> Self {
        Self {
            product_count: products.len(),
            logbook_entry_count: logbook.len(),
            days_until_expiry: (entity.subscription.current_end - today).num_days(),
        }
    }
}
