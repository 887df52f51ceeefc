use analytics::{AnalyticsSnapshot, MarginBand, PortfolioTotals};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, Table};
use rust_decimal::Decimal;

const HEADERS: [&str; 9] = [
    "Order No.",
    "Gross Sales",
    "Discounts",
    "Taxes",
    "Shipping",
    "Sales",
    "Total COGS",
    "Gross Profit",
    "Gross Margin",
];

/// Currency with one decimal place, e.g. `$34.0`.
pub fn format_currency(value: Decimal) -> String {
    format!("${:.1}", value)
}

/// Percentage with one decimal place, e.g. `64.7%`.
pub fn format_percentage(value: Decimal) -> String {
    format!("{:.1}%", value)
}

/// The aggregate margin, or `n/a` when total sales are zero.
pub fn format_total_margin(totals: &PortfolioTotals) -> String {
    totals
        .gross_margin
        .map_or_else(|| "n/a".to_string(), format_percentage)
}

fn band_color(band: MarginBand) -> Color {
    match band {
        MarginBand::Strong => Color::Green,
        MarginBand::Healthy => Color::Blue,
        MarginBand::Thin => Color::Yellow,
        MarginBand::Loss => Color::Red,
    }
}

fn money(value: Decimal) -> Cell {
    Cell::new(format_currency(value)).set_alignment(CellAlignment::Right)
}

/// Renders one row per order followed by a TOTALS row.
pub fn render_table(snapshot: &AnalyticsSnapshot) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(HEADERS.to_vec());

    for row in &snapshot.rows {
        let profit_color = if row.gross_profit.is_sign_negative() { Color::Red } else { Color::Green };
        table.add_row(vec![
            Cell::new(row.order_no.to_string()),
            money(row.gross_sales),
            money(row.discounts),
            money(row.taxes),
            money(row.shipping),
            money(row.sales),
            money(row.total_cogs),
            money(row.gross_profit).fg(profit_color),
            Cell::new(format_percentage(row.gross_margin))
                .set_alignment(CellAlignment::Right)
                .fg(band_color(row.margin_band())),
        ]);
    }

    let totals = &snapshot.totals;
    table.add_row(vec![
        Cell::new("TOTALS"),
        money(totals.gross_sales),
        money(totals.discounts),
        money(totals.taxes),
        money(totals.shipping),
        money(totals.sales),
        money(totals.total_cogs),
        money(totals.gross_profit),
        Cell::new(format_total_margin(totals)).set_alignment(CellAlignment::Right),
    ]);

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AnalyticsEngine;
    use core_types::{LineItem, Order, OrderNumber, Product, ProductId};
    use rust_decimal_macros::dec;

    #[test]
    fn formats_one_decimal_place() {
        assert_eq!(format_currency(dec!(34)), "$34.0");
        assert_eq!(format_currency(dec!(-3.5)), "$-3.5");
        assert_eq!(format_percentage(dec!(64.7)), "64.7%");
        assert_eq!(format_percentage(Decimal::ZERO), "0.0%");
    }

    #[test]
    fn undefined_total_margin_is_not_a_number() {
        let totals = PortfolioTotals::new();
        assert_eq!(format_total_margin(&totals), "n/a");
    }

    #[test]
    fn table_has_a_row_per_order_and_totals() {
        let products = vec![Product {
            id: ProductId(1),
            title: "Mug".to_string(),
            category: "Kitchen".to_string(),
            unit_price: dec!(10),
            cogs: dec!(4),
        }];
        let orders = vec![Order {
            order_no: OrderNumber::from("ORD-1"),
            line_items: vec![LineItem { product_id: ProductId(1), quantity: dec!(3) }],
            discounts: dec!(2),
            taxes: dec!(1),
            shipping: dec!(5),
        }];
        let snapshot = AnalyticsEngine::new().analyze(&orders, &products);

        let rendered = render_table(&snapshot).to_string();

        assert!(rendered.contains("ORD-1"));
        assert!(rendered.contains("$34.0"));
        assert!(rendered.contains("64.7%"));
        assert!(rendered.contains("TOTALS"));
    }
}
