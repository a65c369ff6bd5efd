//! Renewal order line items and total aggregation.
//!
//! A renewal order is a small, user-editable list of package line items.
//! The one nontrivial business rule lives here: at most one line item may
//! carry a Main package, and choosing a second Main silently replaces the
//! previous one in the position of the row being edited.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::packages::{PackageId, PackageKind, ServicePackage};

/// Unique key for a line item within one renewal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemId(Uuid);

impl LineItemId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// One selected package in a renewal order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Line identifier, unique within the order.
    pub line_id: LineItemId,
    /// Selected package.
    pub package_id: PackageId,
    /// Package tier of the selection.
    pub kind: PackageKind,
    /// Display name of the selection.
    pub name: String,
    /// Price per one-year term, in whole currency units.
    pub unit_price: Decimal,
}

impl OrderLine {
    fn from_package(package: &ServicePackage) -> Self {
        Self {
            line_id: LineItemId::generate(),
            package_id: package.id.clone(),
            kind: package.kind,
            name: package.name.clone(),
            unit_price: package.unit_price,
        }
    }
}

/// User-editable collection of renewal line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenewalOrder {
    lines: Vec<OrderLine>,
}

impl RenewalOrder {
    /// Creates an empty order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an order pre-filled with one line per package.
    ///
    /// Used when the renewal view opens with the entity's current services.
    #[must_use]
    pub fn from_packages(packages: &[&ServicePackage]) -> Self {
        Self { lines: packages.iter().map(|p| OrderLine::from_package(p)).collect() }
    }

    /// Returns the current line items in order.
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Appends a new line item with the caller-supplied default package.
    ///
    /// Duplicates are not checked; the source UI allows adding the same
    /// addon row twice and correcting it afterwards.
    #[instrument(skip(self, default_package), fields(package_id = default_package.id.as_str()))]
    pub fn add_line_item(&mut self, default_package: &ServicePackage) -> LineItemId {
        let line = OrderLine::from_package(default_package);
        let line_id = line.line_id;
        self.lines.push(line);
        debug!(lines = self.lines.len(), "line item added");
        line_id
    }

    /// Removes one line item by identifier; a no-op if it does not exist.
    pub fn remove_line_item(&mut self, line_id: LineItemId) {
        self.lines.retain(|l| l.line_id != line_id);
    }

    /// Replaces a line item's package selection and price.
    ///
    /// Unknown line identifiers are ignored and the change is dropped. When
    /// the new selection is a Main package, any other Main line item is
    /// removed so that exactly the edited row carries it.
    #[instrument(skip(self, new_package), fields(package_id = new_package.id.as_str()))]
    pub fn change_line_item(&mut self, line_id: LineItemId, new_package: &ServicePackage) {
        if !self.lines.iter().any(|l| l.line_id == line_id) {
            debug!("change dropped, unknown line item");
            return;
        }

        if new_package.kind == PackageKind::Main {
            self.lines.retain(|l| l.line_id == line_id || l.kind != PackageKind::Main);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.line_id == line_id) {
            line.package_id = new_package.id.clone();
            line.kind = new_package.kind;
            line.name = new_package.name.clone();
            line.unit_price = new_package.unit_price;
        }
    }

    /// Sums `unit_price` over all current line items; zero for an empty order.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.unit_price).sum()
    }

    /// Number of Main line items currently in the order.
    #[must_use]
    pub fn main_line_count(&self) -> usize {
        self.lines.iter().filter(|l| l.kind == PackageKind::Main).count()
    }

    /// Checks the single-Main invariant on the line collection.
    ///
    /// Pure and independent of any screen wiring, so the rule can be tested
    /// without simulating clicks.
    #[must_use]
    pub fn has_single_main(&self) -> bool {
        self.main_line_count() == 1
    }

    /// True when the order has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
