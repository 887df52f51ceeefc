use core_types::OrderNumber;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Profitability figures for one order.
///
/// Derived on every calculation and never stored. Every monetary and percentage
/// field is rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAnalytics {
    pub order_no: OrderNumber,
    pub gross_sales: Decimal,
    pub discounts: Decimal,
    pub taxes: Decimal,
    pub shipping: Decimal,
    pub sales: Decimal,
    #[serde(rename = "totalCOGS")]
    pub total_cogs: Decimal,
    pub gross_profit: Decimal,
    /// Percentage, e.g. `64.7` for 64.7 %.
    pub gross_margin: Decimal,
}

impl OrderAnalytics {
    pub fn margin_band(&self) -> MarginBand {
        MarginBand::classify(self.gross_margin)
    }
}

/// Sums across a set of order rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub gross_sales: Decimal,
    pub discounts: Decimal,
    pub taxes: Decimal,
    pub shipping: Decimal,
    pub sales: Decimal,
    #[serde(rename = "totalCOGS")]
    pub total_cogs: Decimal,
    pub gross_profit: Decimal,
    /// `Σ gross_profit / Σ sales × 100`, or `None` when total sales are zero.
    pub gross_margin: Option<Decimal>,
}

impl PortfolioTotals {
    /// Creates zeroed-out totals with an undefined margin.
    pub fn new() -> Self {
        Self {
            gross_sales: Decimal::ZERO,
            discounts: Decimal::ZERO,
            taxes: Decimal::ZERO,
            shipping: Decimal::ZERO,
            sales: Decimal::ZERO,
            total_cogs: Decimal::ZERO,
            gross_profit: Decimal::ZERO,
            gross_margin: None,
        }
    }
}

impl Default for PortfolioTotals {
    fn default() -> Self {
        Self::new()
    }
}

/// The rows for a batch of orders together with their totals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub rows: Vec<OrderAnalytics>,
    pub totals: PortfolioTotals,
}

/// Coarse health classification of a gross margin percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginBand {
    /// 30 % and above.
    Strong,
    /// 15 % up to 30 %.
    Healthy,
    /// 0 % up to 15 %.
    Thin,
    Loss,
}

impl MarginBand {
    pub fn classify(margin: Decimal) -> Self {
        if margin >= Decimal::from(30) {
            MarginBand::Strong
        } else if margin >= Decimal::from(15) {
            MarginBand::Healthy
        } else if margin >= Decimal::ZERO {
            MarginBand::Thin
        } else {
            MarginBand::Loss
        }
    }
}
