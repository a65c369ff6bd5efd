//! Subscription records and the renewal flow.
//!
//! The renewal view opens with a read-only quote (current services, new
//! billing period, order total), lets the user edit the line items, and
//! submits the order to a simulated backend that resolves after a fixed
//! delay. The quote's period is computed once and never mutated.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    error::{PlatformError, Result},
    order::{OrderLine, RenewalOrder},
    packages::{PackageCatalog, PackageId},
    renewal::{RenewalPeriod, compute_renewal_period},
    workspace::EntityId,
};

/// Fixed delay standing in for the order-creation round trip.
const SUBMIT_DELAY: Duration = Duration::from_millis(600);

/// A production entity's current subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    /// Owning production entity.
    pub entity_id: EntityId,
    /// Currently subscribed packages.
    pub services: Vec<PackageId>,
    /// Last day of validity of the active term.
    pub current_end: NaiveDate,
}

/// Pre-filled renewal quote shown when the renewal view opens.
///
/// The period is derived display data; only the order is user-editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenewalQuote {
    /// Billing period the renewed term will cover.
    pub period: RenewalPeriod,
    /// Editable package line items, pre-filled with the current services.
    pub order: RenewalOrder,
}

impl RenewalQuote {
    /// Builds the quote for a subscription against the package catalog.
    ///
    /// Current services that no longer exist in the catalog are skipped,
    /// matching the flow's semantics for invalid package identifiers.
    #[must_use]
    pub fn open(record: &SubscriptionRecord, catalog: &PackageCatalog) -> Self {
        let packages: Vec<_> =
            record.services.iter().filter_map(|id| catalog.find(id)).collect();
        Self {
            period: compute_renewal_period(record.current_end),
            order: RenewalOrder::from_packages(&packages),
        }
    }

    /// Current order total across all selected line items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.order.total()
    }
}

/// Shape of the data a backend would supply to open the renewal flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenewalFlowInput {
    /// The entity's current service line items.
    pub current_services: Vec<OrderLine>,
    /// Expiry of the active term, `DD/MM/YYYY`.
    #[serde(with = "crate::renewal::display_date")]
    pub current_end_date: NaiveDate,
}

/// Shape of the data an order-creation endpoint would consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenewalFlowOutput {
    /// Line items selected for the renewed term.
    pub renewed_services: Vec<OrderLine>,
    /// First day of the renewed term, `DD/MM/YYYY`.
    #[serde(with = "crate::renewal::display_date")]
    pub new_start_date: NaiveDate,
    /// Last day of the renewed term, `DD/MM/YYYY`.
    #[serde(with = "crate::renewal::display_date")]
    pub new_end_date: NaiveDate,
}

impl RenewalFlowOutput {
    /// Assembles the order-creation payload from a quote.
    #[must_use]
    pub fn from_quote(quote: &RenewalQuote) -> Self {
        Self {
            renewed_services: quote.order.lines().to_vec(),
            new_start_date: quote.period.new_start,
            new_end_date: quote.period.new_end,
        }
    }
}

/// Receipt returned once a renewal order has been created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenewalOrderReceipt {
    /// Created order identifier.
    pub order_id: String,
    /// Owning production entity.
    pub entity_id: EntityId,
    /// Order total at submission time.
    pub total: Decimal,
    /// Billing period the order covers.
    pub period: RenewalPeriod,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Submits a renewal order to the simulated backend.
///
/// Resolves unconditionally after a fixed delay once validation passes; the
/// explicit result type is the seam where real failure and retry semantics
/// will land when a backend replaces the mock.
///
/// # Errors
///
/// Returns [`PlatformError::OrderError`] if the order is empty or does not
/// carry exactly one Main package.
#[instrument(skip(entity_id, quote), fields(entity_id = entity_id.as_str()))]
pub async fn submit_renewal_order(
    entity_id: &EntityId,
    quote: &RenewalQuote,
) -> Result<RenewalOrderReceipt> {
    if quote.order.is_empty() {
        return Err(PlatformError::OrderError("order has no line items".into()));
    }
    if !quote.order.has_single_main() {
        return Err(PlatformError::OrderError(
            "order must carry exactly one main package".into(),
        ));
    }

    tokio::time::sleep(SUBMIT_DELAY).await;

    let receipt = RenewalOrderReceipt {
        order_id: format!("ord-{}", Uuid::new_v4()),
        entity_id: entity_id.clone(),
        total: quote.total(),
        period: quote.period,
        created_at: Utc::now(),
    };
    info!(order_id = %receipt.order_id, total = %receipt.total, "renewal order created");
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::{PackageKind, ServicePackage};

    fn package(id: &str, kind: PackageKind, price: i64) -> ServicePackage {
        ServicePackage {
            id: PackageId::new(id).unwrap(),
            kind,
            name: id.to_owned(),
            unit_price: Decimal::from(price),
        }
    }

    fn catalog() -> PackageCatalog {
        PackageCatalog::new(vec![
            package("pkg-standard", PackageKind::Main, 500),
            package("pkg-stamps", PackageKind::Addon, 120),
        ])
    }

    fn record(services: &[&str], end: NaiveDate) -> SubscriptionRecord {
        SubscriptionRecord {
            entity_id: EntityId::new("farm-01").unwrap(),
            services: services.iter().map(|s| PackageId::new(*s).unwrap()).collect(),
            current_end: end,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ========================================================================
    // Quote Tests
    // ========================================================================

    #[test]
    fn test_quote_prefills_services_and_period() {
        let quote = RenewalQuote::open(
            &record(&["pkg-standard", "pkg-stamps"], date(2025, 7, 1)),
            &catalog(),
        );

        assert_eq!(quote.order.lines().len(), 2);
        assert_eq!(quote.total(), Decimal::from(620));
        assert_eq!(quote.period.new_start, date(2025, 7, 2));
        assert_eq!(quote.period.new_end, date(2026, 7, 1));
    }

    #[test]
    fn test_quote_skips_unknown_services() {
        let quote =
            RenewalQuote::open(&record(&["pkg-standard", "pkg-gone"], date(2025, 7, 1)), &catalog());

        assert_eq!(quote.order.lines().len(), 1);
        assert_eq!(quote.total(), Decimal::from(500));
    }

    // ========================================================================
    // Wire Shape Tests
    // ========================================================================

    #[test]
    fn test_flow_output_uses_display_dates() {
        let quote = RenewalQuote::open(&record(&["pkg-standard"], date(2025, 12, 31)), &catalog());
        let output = RenewalFlowOutput::from_quote(&quote);

        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"new_start_date\":\"01/01/2026\""));
        assert!(json.contains("\"new_end_date\":\"31/12/2026\""));
    }

    #[test]
    fn test_flow_input_roundtrip() {
        let json = r#"{"current_services":[],"current_end_date":"01/07/2025"}"#;
        let input: RenewalFlowInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.current_end_date, date(2025, 7, 1));

        let back = serde_json::to_string(&input).unwrap();
        assert!(back.contains("01/07/2025"));
    }

    // ========================================================================
    // Submission Tests
    // ========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_submit_valid_order() {
        let quote = RenewalQuote::open(
            &record(&["pkg-standard", "pkg-stamps"], date(2025, 7, 1)),
            &catalog(),
        );
        let entity = EntityId::new("farm-01").unwrap();

        let receipt = submit_renewal_order(&entity, &quote).await.unwrap();
        assert_eq!(receipt.total, Decimal::from(620));
        assert_eq!(receipt.period.new_start, date(2025, 7, 2));
        assert!(receipt.order_id.starts_with("ord-"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_empty_order_rejected() {
        let quote = RenewalQuote::open(&record(&[], date(2025, 7, 1)), &catalog());
        let entity = EntityId::new("farm-01").unwrap();

        let result = submit_renewal_order(&entity, &quote).await;
        assert!(matches!(result.unwrap_err(), PlatformError::OrderError(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_without_main_rejected() {
        let quote = RenewalQuote::open(&record(&["pkg-stamps"], date(2025, 7, 1)), &catalog());
        let entity = EntityId::new("farm-01").unwrap();

        let result = submit_renewal_order(&entity, &quote).await;
        assert!(matches!(result.unwrap_err(), PlatformError::OrderError(_)));
    }
}
