//! The individual profitability formulas. Every function returns a value already
//! rounded to one decimal place.
//!
//! Stored values are not validated, so arithmetic saturates at `Decimal::MAX` /
//! `Decimal::MIN` instead of panicking. Saturation is logged at `warn`.

use crate::catalog::Catalog;
use crate::rounding::round_one_decimal;
use core_types::{LineItem, Product};
use rust_decimal::Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Sum of `unit_price × quantity` across the line items.
///
/// Items whose product is not in the catalog contribute nothing.
pub fn gross_sales(line_items: &[LineItem], catalog: &Catalog<'_>) -> Decimal {
    round_one_decimal(sum_over_catalog(line_items, catalog, |p| p.unit_price))
}

/// Sum of `cogs × quantity` across the line items.
///
/// Items whose product is not in the catalog contribute nothing.
pub fn total_cogs(line_items: &[LineItem], catalog: &Catalog<'_>) -> Decimal {
    round_one_decimal(sum_over_catalog(line_items, catalog, |p| p.cogs))
}

/// `gross_sales + taxes - discounts + shipping`.
///
/// Taxes and shipping are passed on to the customer and so raise sales; discounts lower them.
pub fn sales(gross_sales: Decimal, taxes: Decimal, discounts: Decimal, shipping: Decimal) -> Decimal {
    let sales = gross_sales
        .checked_add(taxes)
        .and_then(|v| v.checked_sub(discounts))
        .and_then(|v| v.checked_add(shipping))
        .unwrap_or_else(|| {
            tracing::warn!(%gross_sales, %taxes, %discounts, %shipping, "Sales overflowed; saturating.");
            gross_sales
                .saturating_add(taxes)
                .saturating_sub(discounts)
                .saturating_add(shipping)
        });
    round_one_decimal(sales)
}

/// `sales - total_cogs`. Negative for a loss-making order.
pub fn gross_profit(sales: Decimal, total_cogs: Decimal) -> Decimal {
    let profit = sales.checked_sub(total_cogs).unwrap_or_else(|| {
        tracing::warn!(%sales, %total_cogs, "Gross profit overflowed; saturating.");
        sales.saturating_sub(total_cogs)
    });
    round_one_decimal(profit)
}

/// Gross profit as a percentage of sales. Exactly zero when sales are zero.
pub fn gross_margin(gross_profit: Decimal, sales: Decimal) -> Decimal {
    if sales.is_zero() {
        return Decimal::ZERO;
    }
    round_one_decimal(percentage(gross_profit, sales))
}

/// `part / whole × 100`, saturating when the quotient is out of range. `whole` must be non-zero.
pub(crate) fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .unwrap_or_else(|| {
            tracing::warn!(%part, %whole, "Percentage overflowed; saturating.");
            if part.is_sign_negative() == whole.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        })
}

fn sum_over_catalog<F>(line_items: &[LineItem], catalog: &Catalog<'_>, unit_amount: F) -> Decimal
where
    F: Fn(&Product) -> Decimal,
{
    line_items
        .iter()
        .filter_map(|item| match catalog.get(item.product_id) {
            Some(product) => {
                let unit = unit_amount(product);
                Some(unit.checked_mul(item.quantity).unwrap_or_else(|| {
                    tracing::warn!(product_id = %item.product_id, %unit, quantity = %item.quantity, "Line amount overflowed; saturating.");
                    unit.saturating_mul(item.quantity)
                }))
            }
            None => {
                tracing::trace!(product_id = %item.product_id, "Line item references an unknown product; skipping.");
                None
            }
        })
        .fold(Decimal::ZERO, |total, amount| {
            total.checked_add(amount).unwrap_or_else(|| {
                tracing::warn!(%total, %amount, "Line item sum overflowed; saturating.");
                total.saturating_add(amount)
            })
        })
}
