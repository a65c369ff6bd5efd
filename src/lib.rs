//! OriginTrace Platform Core
//!
//! Client-side domain core for a product traceability and
//! certification-management platform. The hosted product gives each
//! production entity a workspace: a dashboard, a traceable product catalog,
//! a production logbook, and a service subscription that is renewed in
//! yearly terms and settled by bank transfer.
//!
//! This crate carries everything in that workspace that is not pixels:
//! the mock in-memory stores, the modal state machines, and the renewal
//! and order arithmetic, all independent of any UI toolkit so they can be
//! unit-tested without simulating clicks.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                UI screens (not here)           │
//! └───────┬──────────────┬──────────────┬──────────┘
//!         │              │              │
//! ┌───────▼──────┐ ┌─────▼─────┐ ┌──────▼─────────┐
//! │ subscription │ │  catalog  │ │    logbook     │
//! │  + renewal   │ │  (CRUD)   │ │ (+ FSM wizard) │
//! └───────┬──────┘ └───────────┘ └────────────────┘
//!         │
//! ┌───────▼──────┐ ┌───────────┐
//! │ order lines  │ │  payment  │  simulated gateway,
//! │ (single-Main │ │  (proof + │  fixed-delay timer
//! │    rule)     │ │  confirm) │
//! └──────────────┘ └───────────┘
//! ```
//!
//! # Quick Start
//!
//! Open a renewal quote and inspect the derived billing period:
//!
//! ```
//! use chrono::NaiveDate;
//! use origintrace::renewal::{compute_renewal_period, format_display_date};
//!
//! let current_end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
//! let period = compute_renewal_period(current_end);
//!
//! assert_eq!(format_display_date(period.new_start), "01/01/2026");
//! assert_eq!(format_display_date(period.new_end), "31/12/2026");
//! ```
//!
//! # Module Organization
//!
//! - [`renewal`]: renewal period calculator and `DD/MM/YYYY` display dates
//! - [`packages`]: service packages (Main/Addon tiers) and their catalog
//! - [`order`]: renewal order line items, single-Main rule, total
//! - [`subscription`]: subscription records, quotes, simulated submission
//! - [`payment`]: payment proof validation and the simulated gateway
//! - [`catalog`]: product catalog CRUD with filtering and pagination
//! - [`logbook`]: production log records and the work-log wizard
//! - [`activation`]: auto-activation setup wizard
//! - [`account`]: account profile fields
//! - [`workspace`]: production entities and the dashboard read model
//! - [`error`]: crate-wide error type
//!
//! # Mock Semantics
//!
//! There is no backend behind this crate yet. Stores are plain in-memory
//! collections, and the two "network" operations (renewal submission,
//! payment confirmation) resolve after a fixed delay and always succeed.
//! Both already return explicit `Result` values so that real failure and
//! retry semantics can land without reshaping callers.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod account;
pub mod activation;
pub mod catalog;
pub mod error;
pub mod logbook;
pub mod order;
pub mod packages;
pub mod payment;
pub mod renewal;
pub mod subscription;
pub mod workspace;

pub use error::{PlatformError, Result};
pub use renewal::{RenewalPeriod, compute_renewal_period};
