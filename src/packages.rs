//! Service package definitions.
//!
//! A production entity holds exactly one Main package at a time plus any
//! number of stackable Addon packages. Packages are the sellable units that
//! renewal orders are assembled from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, Result};

/// Unique identifier for a service package.
///
/// Wraps a catalog-provided package ID with type safety.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId(String);

impl PackageId {
    /// Creates a new package ID after validation.
    ///
    /// # Errors
    ///
    /// Returns error if the ID is empty, exceeds 64 characters, or contains
    /// characters other than alphanumerics, hyphens, and underscores.
    pub fn new<S: Into<String>>(id: S) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(PlatformError::InvalidPackageId("package_id cannot be empty".into()));
        }
        if id.len() > 64 {
            return Err(PlatformError::InvalidPackageId(
                "package_id must be 64 characters or less".into(),
            ));
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(PlatformError::InvalidPackageId(
                "package_id can only contain alphanumeric characters, hyphens, and underscores"
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

/// Package tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageKind {
    /// The single primary subscription tier an entity holds at a time.
    Main,
    /// A supplementary, stackable purchase on top of the main package.
    Addon,
}

/// A sellable service package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicePackage {
    /// Unique package identifier.
    pub id: PackageId,
    /// Package tier.
    pub kind: PackageKind,
    /// Display name.
    pub name: String,
    /// Price per one-year term, in whole currency units.
    pub unit_price: Decimal,
}

/// The set of packages currently offered for sale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageCatalog {
    /// All offered packages.
    pub packages: Vec<ServicePackage>,
}

impl PackageCatalog {
    /// Creates a catalog from a list of packages.
    #[must_use]
    pub fn new(packages: Vec<ServicePackage>) -> Self {
        Self { packages }
    }

    /// Looks up a package by ID.
    #[must_use]
    pub fn find(&self, id: &PackageId) -> Option<&ServicePackage> {
        self.packages.iter().find(|p| &p.id == id)
    }

    /// Returns the offered Main packages.
    #[must_use]
    pub fn main_packages(&self) -> Vec<&ServicePackage> {
        self.packages.iter().filter(|p| p.kind == PackageKind::Main).collect()
    }

    /// Returns the offered Addon packages.
    #[must_use]
    pub fn addon_packages(&self) -> Vec<&ServicePackage> {
        self.packages.iter().filter(|p| p.kind == PackageKind::Addon).collect()
    }
}
