use crate::catalog::Catalog;
use crate::formulas::{gross_margin, gross_profit, gross_sales, percentage, sales, total_cogs};
use crate::report::{AnalyticsSnapshot, OrderAnalytics, PortfolioTotals};
use crate::rounding::round_one_decimal;
use core_types::{Order, Product};

/// A stateless calculator for deriving profitability metrics from orders.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for a batch of orders.
    ///
    /// # Arguments
    ///
    /// * `orders` - The orders to analyse. Rows come back in the same order.
    /// * `products` - The current product catalog. Prices are read as they are now.
    ///
    /// # Returns
    ///
    /// An `AnalyticsSnapshot` holding one row per order and the portfolio totals.
    pub fn analyze(&self, orders: &[Order], products: &[Product]) -> AnalyticsSnapshot {
        let catalog = Catalog::from_products(products);

        let rows: Vec<OrderAnalytics> = orders
            .iter()
            .map(|order| self.order_analytics(order, &catalog))
            .collect();
        let totals = self.portfolio_totals(&rows);

        tracing::debug!(
            orders = rows.len(),
            products = catalog.len(),
            total_sales = %totals.sales,
            "Computed order analytics."
        );

        AnalyticsSnapshot { rows, totals }
    }

    /// Computes every figure for a single order against the given catalog.
    pub fn order_analytics(&self, order: &Order, catalog: &Catalog<'_>) -> OrderAnalytics {
        let gross_sales = gross_sales(&order.line_items, catalog);
        let total_cogs = total_cogs(&order.line_items, catalog);
        let sales = sales(gross_sales, order.taxes, order.discounts, order.shipping);
        let gross_profit = gross_profit(sales, total_cogs);
        let gross_margin = gross_margin(gross_profit, sales);

        OrderAnalytics {
            order_no: order.order_no.clone(),
            gross_sales,
            discounts: round_one_decimal(order.discounts),
            taxes: round_one_decimal(order.taxes),
            shipping: round_one_decimal(order.shipping),
            sales,
            total_cogs,
            gross_profit,
            gross_margin,
        }
    }

    /// Sums the rows field by field and derives the portfolio-wide margin from the sums.
    ///
    /// The margin is `None` when total sales are zero. Sums saturate at the `Decimal` range.
    pub fn portfolio_totals(&self, rows: &[OrderAnalytics]) -> PortfolioTotals {
        let mut totals = PortfolioTotals::new();

        for row in rows {
            totals.gross_sales = totals.gross_sales.saturating_add(row.gross_sales);
            totals.discounts = totals.discounts.saturating_add(row.discounts);
            totals.taxes = totals.taxes.saturating_add(row.taxes);
            totals.shipping = totals.shipping.saturating_add(row.shipping);
            totals.sales = totals.sales.saturating_add(row.sales);
            totals.total_cogs = totals.total_cogs.saturating_add(row.total_cogs);
            totals.gross_profit = totals.gross_profit.saturating_add(row.gross_profit);
        }

        if totals.sales.is_zero() {
            tracing::debug!(orders = rows.len(), "Total sales are zero; portfolio margin is undefined.");
        } else {
            totals.gross_margin = Some(round_one_decimal(percentage(totals.gross_profit, totals.sales)));
        }

        totals
    }
}
