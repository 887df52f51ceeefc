use core_types::{Product, ProductId};
use std::collections::HashMap;

/// Product lookup by identifier for the duration of one calculation batch.
///
/// If the same identifier appears more than once, the first product wins.
#[derive(Debug, Default)]
pub struct Catalog<'a> {
    by_id: HashMap<ProductId, &'a Product>,
}

impl<'a> Catalog<'a> {
    pub fn from_products(products: &'a [Product]) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        for product in products {
            by_id.entry(product.id).or_insert(product);
        }
        Self { by_id }
    }

    pub fn get(&self, id: ProductId) -> Option<&'a Product> {
        self.by_id.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
