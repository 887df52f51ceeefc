//! # Profitlens Analytics Engine
//!
//! This crate derives order profitability from line items and the current product
//! catalog: gross sales, COGS, sales, gross profit and gross margin, per order and
//! across a whole set of orders.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** This crate has no knowledge of files, HTTP or the terminal.
//!   It depends only on `core-types`.
//! - **Stateless Calculation:** Nothing is cached. Every call recomputes from the
//!   orders and products it is given, so results always reflect current prices.
//! - **One Rounding Primitive:** Every public figure passes through
//!   [`round_one_decimal`] as its final step.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: Builds per-order rows and portfolio totals for a batch.
//! - `Catalog`: Product lookup by identifier, built once per batch.
//! - `formulas`: The individual line-level and order-level formulas.
//! - `OrderAnalytics`, `PortfolioTotals`, `AnalyticsSnapshot`: The output records.

// Declare the modules that constitute this crate.
pub mod catalog;
pub mod engine;
pub mod formulas;
pub mod report;
pub mod rounding;

// Re-export the key components to create a clean, public-facing API.
pub use catalog::Catalog;
pub use engine::AnalyticsEngine;
pub use formulas::{gross_margin, gross_profit, gross_sales, sales, total_cogs};
pub use report::{AnalyticsSnapshot, MarginBand, OrderAnalytics, PortfolioTotals};
pub use rounding::round_one_decimal;
