use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// The stable identifier of a product in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sellable product as held in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub unit_price: Decimal,
    /// Unit cost of goods sold.
    pub cogs: Decimal,
}

impl Product {
    /// Builds a product from a draft. The draft is expected to be validated already.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            title: draft.title,
            category: draft.category,
            unit_price: draft.unit_price,
            cogs: draft.cogs,
        }
    }

    /// Overwrites every writable field, keeping the identifier.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.title = draft.title;
        self.category = draft.category;
        self.unit_price = draft.unit_price;
        self.cogs = draft.cogs;
    }
}

/// The writable part of a product, as submitted when creating or editing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub unit_price: Decimal,
    pub cogs: Decimal,
}

impl ProductDraft {
    /// Reads a draft from a request body of any shape.
    ///
    /// Text fields that are missing or not strings become empty. Amounts that are
    /// missing or not JSON numbers become zero. `validate` then rejects either case
    /// with its usual message.
    pub fn from_json(body: &Value) -> Self {
        let text = |key: &str| body.get(key).and_then(Value::as_str).unwrap_or_default().to_string();
        let amount = |key: &str| {
            body.get(key)
                .filter(|value| value.is_number())
                .and_then(|value| <Decimal as Deserialize>::deserialize(value).ok())
                .unwrap_or_default()
        };

        Self {
            title: text("title"),
            category: text("category"),
            unit_price: amount("unitPrice"),
            cogs: amount("cogs"),
        }
    }

    /// Checks the draft before it is allowed into the catalog.
    ///
    /// Title and category must be non-blank, and both the unit price and the
    /// cost must be strictly positive.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() || self.category.trim().is_empty() {
            let field = if self.title.trim().is_empty() { "title" } else { "category" };
            return Err(CoreError::InvalidInput(
                field.to_string(),
                "Title and category are required".to_string(),
            ));
        }

        if self.unit_price <= Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                "unitPrice".to_string(),
                "Unit price must be a number greater than 0".to_string(),
            ));
        }

        if self.cogs <= Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                "cogs".to_string(),
                "COGS must be a number greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// An order identifier. Stored data uses either plain numbers or strings such as `"ORD-1001"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderNumber {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderNumber::Numeric(n) => write!(f, "{}", n),
            OrderNumber::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OrderNumber {
    fn from(value: &str) -> Self {
        OrderNumber::Text(value.to_string())
    }
}

impl From<u64> for OrderNumber {
    fn from(value: u64) -> Self {
        OrderNumber::Numeric(value)
    }
}

/// One product/quantity pairing within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub quantity: Decimal,
}

/// A customer order with its scalar adjustments.
///
/// The adjustments are taken verbatim from storage and are not validated; they
/// may be negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_no: OrderNumber,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub discounts: Decimal,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub taxes: Decimal,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub shipping: Decimal,
}

/// Stored amounts may be `null`; they count as zero.
fn null_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

/// Everything the data file holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Dataset {
    /// The identifier a newly created product receives: one past the current maximum.
    pub fn next_product_id(&self) -> ProductId {
        self.products
            .iter()
            .map(|p| p.id.0)
            .max()
            .map_or(ProductId(1), |max| ProductId(max + 1))
    }
}
