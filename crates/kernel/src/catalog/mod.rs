//! Product catalog.
//!
//! The catalog is a fixed list compiled into the binary. Pages reach it only
//! through [`CatalogRepository`], a read-only lookup keyed by slug, so tests
//! can substitute their own list.

use std::collections::HashMap;

use serde::Serialize;

mod data;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Unique URL-safe identifier.
    pub slug: String,
    pub name: String,
    pub summary: String,
}

/// A single specification line, e.g. "Capacity" / "2,000 kN".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spec {
    pub label: String,
    pub value: String,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique URL-safe identifier.
    pub slug: String,
    /// Slug of the owning category.
    pub category: String,
    pub name: String,
    pub summary: String,
    pub description: String,
    pub specs: Vec<Spec>,
}

/// Read-only access to categories and products.
pub trait CatalogRepository: Send + Sync {
    /// Find a category by slug.
    fn lookup_category(&self, slug: &str) -> Option<&Category>;

    /// Find a product by slug.
    fn lookup_product(&self, slug: &str) -> Option<&Product>;

    /// All categories in display order.
    fn categories(&self) -> &[Category];

    /// Products of one category in display order.
    fn products_in(&self, category_slug: &str) -> Vec<&Product>;
}

/// In-memory catalog indexed by slug.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    categories: Vec<Category>,
    products: Vec<Product>,
    category_index: HashMap<String, usize>,
    product_index: HashMap<String, usize>,
}

impl StaticCatalog {
    /// Build a catalog from explicit lists.
    ///
    /// Later entries with a duplicate slug are ignored.
    pub fn from_parts(categories: Vec<Category>, products: Vec<Product>) -> Self {
        let mut category_index = HashMap::with_capacity(categories.len());
        for (i, c) in categories.iter().enumerate() {
            category_index.entry(c.slug.clone()).or_insert(i);
        }

        let mut product_index = HashMap::with_capacity(products.len());
        for (i, p) in products.iter().enumerate() {
            product_index.entry(p.slug.clone()).or_insert(i);
        }

        Self {
            categories,
            products,
            category_index,
            product_index,
        }
    }

    /// The site's shipped catalog.
    pub fn builtin() -> Self {
        Self::from_parts(data::categories(), data::products())
    }

    /// Number of products.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

impl CatalogRepository for StaticCatalog {
    fn lookup_category(&self, slug: &str) -> Option<&Category> {
        self.category_index
            .get(slug)
            .and_then(|&i| self.categories.get(i))
    }

    fn lookup_product(&self, slug: &str) -> Option<&Product> {
        self.product_index
            .get(slug)
            .and_then(|&i| self.products.get(i))
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn products_in(&self, category_slug: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category_slug)
            .collect()
    }
}
