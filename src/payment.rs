//! Simulated payment confirmation.
//!
//! The platform's payment step accepts a bank-transfer transaction code or
//! an uploaded proof image; confirmation itself is a fixed-delay timer that
//! always approves. The explicit result type is where real gateway failure
//! semantics will land when the mock is replaced.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{PlatformError, Result};

/// Fixed delay standing in for the gateway round trip.
const CONFIRM_DELAY: Duration = Duration::from_millis(800);

/// Proof of payment supplied before confirmation is allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentProof {
    /// Bank-transfer transaction code entered by the user.
    TransactionCode {
        /// The code as typed.
        code: String,
    },
    /// Reference to an uploaded proof-of-transfer image.
    ProofImage {
        /// Upload reference or URL.
        image_ref: String,
    },
}

impl PaymentProof {
    /// Validates that usable proof was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::InvalidPaymentProof`] for an empty
    /// transaction code or image reference.
    pub fn validate(&self) -> Result<()> {
        let value = match self {
            Self::TransactionCode { code } => code,
            Self::ProofImage { image_ref } => image_ref,
        };
        if value.trim().is_empty() {
            return Err(PlatformError::InvalidPaymentProof(
                "enter a transaction code or upload a proof image".into(),
            ));
        }
        Ok(())
    }
}

/// Payment outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Payment approved.
    Approved,
    /// Payment declined.
    Declined,
    /// Payment pending manual review.
    Pending,
}

/// Result of a confirmed payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Transaction identifier.
    pub transaction_id: String,
    /// Order the payment settles.
    pub order_id: String,
    /// Paid amount, in whole currency units.
    pub amount: Decimal,
    /// Payment outcome.
    pub status: PaymentStatus,
    /// Confirmation timestamp.
    pub confirmed_at: DateTime<Utc>,
}

/// Confirms payment for an order against the simulated gateway.
///
/// Validates the proof, waits out the fixed delay, and approves. The mock
/// never declines; [`PaymentStatus::Declined`] and
/// [`PaymentStatus::Pending`] exist for the backend that will replace it.
///
/// # Errors
///
/// Returns [`PlatformError::InvalidPaymentProof`] if the proof is empty.
#[instrument(skip(proof))]
pub async fn confirm_payment(
    order_id: &str,
    amount: Decimal,
    proof: &PaymentProof,
) -> Result<PaymentReceipt> {
    proof.validate()?;

    tokio::time::sleep(CONFIRM_DELAY).await;

    let receipt = PaymentReceipt {
        transaction_id: format!("txn-{}", Uuid::new_v4()),
        order_id: order_id.to_owned(),
        amount,
        status: PaymentStatus::Approved,
        confirmed_at: Utc::now(),
    };
    info!(transaction_id = %receipt.transaction_id, amount = %amount, "payment confirmed");
    Ok(receipt)
}
