use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use litoral_core::{DomainError, DomainResult, ProductId};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Pesca,
    Caza,
    Camping,
    Outdoor,
}

/// All categories, in display order.
pub const CATEGORIES: [Category; 4] = [
    Category::Pesca,
    Category::Caza,
    Category::Camping,
    Category::Outdoor,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pesca => "Pesca",
            Category::Caza => "Caza",
            Category::Camping => "Camping",
            Category::Outdoor => "Outdoor",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog product record.
///
/// `price` is optional: wholesale items without a listed price are quoted on
/// request. `hidden` products stay out of the public listing but remain
/// addressable by id (existing cart lines keep working).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub code: String,
    pub category: Category,
    pub description: String,
    /// Price in whole pesos; `None` means "price on request".
    pub price: Option<u64>,
    /// Thumbnail reference (URL-like); not validated.
    pub image: Option<String>,
    pub hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Validate a record before it enters the catalog.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }
        if self.code.trim().is_empty() {
            return Err(DomainError::validation("product code must not be empty"));
        }
        Ok(())
    }

    fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        q.is_empty()
            || self.name.to_lowercase().contains(&q)
            || self.code.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
    }
}

/// Read-side catalog contract consumed by the presentation layer.
///
/// The cart engine takes `CartLineInput` projections of these records as
/// input to `add`; it does not depend on this trait.
pub trait CatalogProvider: Send + Sync {
    /// Look up one product by id, hidden or not.
    fn product(&self, id: &ProductId) -> Option<Product>;

    /// All non-hidden products, in catalog order.
    fn visible(&self) -> Vec<Product>;

    /// Non-hidden products filtered by category and a case-insensitive
    /// search over name, code and description. `None` category means all.
    fn search(&self, query: &str, category: Option<Category>) -> Vec<Product>;
}

/// In-memory catalog for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record (validated).
    pub fn upsert(&mut self, product: Product) -> DomainResult<()> {
        product.validate()?;
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => self.products.push(product),
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn product(&self, id: &ProductId) -> Option<Product> {
        self.products.iter().find(|p| &p.id == id).cloned()
    }

    fn visible(&self) -> Vec<Product> {
        self.products.iter().filter(|p| !p.hidden).cloned().collect()
    }

    fn search(&self, query: &str, category: Option<Category>) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| !p.hidden)
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| p.matches_query(query))
            .cloned()
            .collect()
    }
}
