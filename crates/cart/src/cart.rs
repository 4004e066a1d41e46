use serde::{Deserialize, Serialize};

use litoral_catalog::Product;
use litoral_core::ProductId;

/// One product's order entry.
///
/// Display fields (`name`, `code`, `price`, `image`) are captured at add
/// time and are not re-synced if the catalog record later changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub code: String,
    /// Price in whole pesos; `None` means "price on request".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Invariant: >= 1 in every persisted or returned cart.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal, if the line is priced.
    pub fn subtotal(&self) -> Option<u64> {
        self.price.map(|p| p.saturating_mul(u64::from(self.quantity)))
    }
}

/// Add-time projection of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineInput {
    pub product_id: ProductId,
    pub name: String,
    pub code: String,
    pub price: Option<u64>,
    pub image: Option<String>,
}

impl From<&Product> for CartLineInput {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            code: product.code.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

impl From<Product> for CartLineInput {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name,
            code: product.code,
            price: product.price,
            image: product.image,
        }
    }
}

/// Free-text customer metadata, persisted independently of the cart.
///
/// Survives `clear`; all fields optional (empty string = not provided).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub notes: String,
}

/// Ordered sequence of cart lines, unique by `product_id`.
///
/// Iteration order is insertion order; the order message compiler depends on
/// it being stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(Vec<CartLine>);

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.0
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.0.iter().find(|l| &l.product_id == product_id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn total_units(&self) -> u64 {
        self.0.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of subtotals over priced lines only.
    ///
    /// `None` when no line carries a price; unpriced lines never contribute.
    pub fn estimated_total(&self) -> Option<u64> {
        let mut priced = self.0.iter().filter_map(CartLine::subtotal).peekable();
        priced.peek()?;
        Some(priced.fold(0u64, u64::saturating_add))
    }

    /// Merge-add: an existing line with the same `product_id` has its
    /// quantity incremented by `quantity` (no cap); otherwise a new line is
    /// appended. The increment is not clamped; callers pass >= 1.
    pub fn add_line(&mut self, input: CartLineInput, quantity: u32) {
        match self.0.iter_mut().find(|l| l.product_id == input.product_id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(quantity);
            }
            None => self.0.push(CartLine {
                product_id: input.product_id,
                name: input.name,
                code: input.code,
                price: input.price,
                image: input.image,
                quantity,
            }),
        }
    }

    /// Set the matching line's quantity to `max(1, quantity)`.
    ///
    /// Quantity can never be driven to zero or below through this path. An
    /// absent `product_id` is a no-op, not an error.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if let Some(line) = self.0.iter_mut().find(|l| &l.product_id == product_id) {
            line.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        }
    }

    /// Delete the matching line; no-op if absent.
    pub fn remove_line(&mut self, product_id: &ProductId) {
        self.0.retain(|l| &l.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
