//! Product catalog for a production entity.
//!
//! Plain in-memory CRUD over the entity's products, with the client-side
//! name/category filtering and pagination the catalog screens apply.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::{PlatformError, Result};

/// Default page size for catalog listings.
const DEFAULT_PER_PAGE: u32 = 20;

/// Unique identifier for a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new product ID after validation.
    ///
    /// # Errors
    ///
    /// Returns error if the ID is empty, exceeds 64 characters, or contains
    /// characters other than alphanumerics, hyphens, and underscores.
    pub fn new<S: Into<String>>(id: S) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(PlatformError::InvalidProductId("product_id cannot be empty".into()));
        }
        if id.len() > 64 {
            return Err(PlatformError::InvalidProductId(
                "product_id must be 64 characters or less".into(),
            ));
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(PlatformError::InvalidProductId(
                "product_id can only contain alphanumeric characters, hyphens, and underscores"
                    .into(),
            ));
        }
        Ok(Self(id))
    }

    fn generate() -> Self {
        Self(format!("prod-{}", Uuid::new_v4()))
    }

    /// Returns the inner string reference.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A traceable product in the entity's catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Product category (e.g. "vegetables", "fruit").
    pub category: String,
    /// Sale unit (e.g. "kg", "box").
    pub unit: String,
    /// Product description.
    pub description: String,
    /// Product image URLs.
    pub image_urls: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    /// Product name.
    pub name: String,
    /// Product category.
    pub category: String,
    /// Sale unit.
    pub unit: String,
    /// Product description.
    pub description: String,
    /// Product image URLs.
    pub image_urls: Vec<String>,
}

/// Partial update of a product; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    /// New product name.
    pub name: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New sale unit.
    pub unit: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Replacement image URL list.
    pub image_urls: Option<Vec<String>>,
}

/// Listing filter applied client-side over the in-memory catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive substring match on the product name.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Page number (default 1).
    pub page: Option<u32>,
    /// Items per page (default 20).
    pub per_page: Option<u32>,
}

/// One page of catalog results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products in the current page.
    pub products: Vec<Product>,
    /// Total count after filtering.
    pub total: u32,
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
}

/// In-memory product store for one production entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of products in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the store holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Creates a product and returns its generated ID.
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub fn create(&mut self, new: NewProduct) -> ProductId {
        let id = ProductId::generate();
        self.products.push(Product {
            id: id.clone(),
            name: new.name,
            category: new.category,
            unit: new.unit,
            description: new.description,
            image_urls: new.image_urls,
            created_at: Utc::now(),
        });
        debug!(product_id = id.as_str(), total = self.products.len(), "product created");
        id
    }

    /// Looks up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Applies a partial update to a product.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::UnknownProduct`] if no product has this ID.
    pub fn update(&mut self, id: &ProductId, update: ProductUpdate) -> Result<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| PlatformError::UnknownProduct(id.as_str().to_owned()))?;

        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(unit) = update.unit {
            product.unit = unit;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(image_urls) = update.image_urls {
            product.image_urls = image_urls;
        }
        Ok(())
    }

    /// Removes a product and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::UnknownProduct`] if no product has this ID.
    #[instrument(skip(self), fields(product_id = id.as_str()))]
    pub fn remove(&mut self, id: &ProductId) -> Result<Product> {
        let index = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| PlatformError::UnknownProduct(id.as_str().to_owned()))?;
        Ok(self.products.remove(index))
    }

    /// Lists products with filtering and pagination.
    ///
    /// An out-of-range page yields an empty page with the correct `total`.
    #[must_use]
    pub fn list(&self, filter: &ProductFilter) -> ProductPage {
        let search = filter.search.as_ref().map(|s| s.to_lowercase());
        let filtered: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                search.as_ref().is_none_or(|q| p.name.to_lowercase().contains(q))
                    && filter.category.as_ref().is_none_or(|c| &p.category == c)
            })
            .collect();

        let page = filter.page.unwrap_or(1).max(1);
        let per_page = filter.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
        let start = (page - 1) as usize * per_page as usize;

        let products = filtered
            .iter()
            .skip(start)
            .take(per_page as usize)
            .map(|p| (*p).clone())
            .collect();

        ProductPage {
            products,
            total: u32::try_from(filtered.len()).unwrap_or(u32::MAX),
            page,
            per_page,
        }
    }
}
