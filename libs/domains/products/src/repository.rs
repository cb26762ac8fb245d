use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Category, CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence.
///
/// Absence is data at this layer: `find_by_id`, `update` and `delete`
/// answer `None`/`false` for unknown ids instead of erroring. Every read
/// returns the product with its category snapshot embedded (the eager join
/// is part of this contract, not an access pattern of the caller).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by id
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Case-insensitive exact name match. With several matches the first in
    /// storage order (lowest id) wins; the tie-break is arbitrary.
    async fn find_by_name(&self, name: &str) -> ProductResult<Option<Product>>;

    /// Persist a new product. Fails with `CategoryNotFound` when
    /// `category_id` references nothing.
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Apply a partial update. `None` when the id is unknown; fails with
    /// `CategoryNotFound` when a supplied `category_id` references nothing.
    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Delete a product. `false` when the id is unknown.
    async fn delete(&self, id: i64) -> ProductResult<bool>;
}

/// Product row as stored; reads join the category snapshot on the way out
#[derive(Debug, Clone)]
struct ProductRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: Decimal,
    category_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Inner {
    categories: HashMap<i64, Category>,
    products: HashMap<i64, ProductRow>,
    next_category_id: i64,
    next_product_id: i64,
}

impl Inner {
    fn join(&self, row: &ProductRow) -> ProductResult<Product> {
        let category = self.categories.get(&row.category_id).cloned().ok_or_else(|| {
            ProductError::Storage(format!(
                "category {} missing for product {}",
                row.category_id, row.id
            ))
        })?;

        Ok(Product {
            id: row.id,
            name: row.name.clone(),
            description: row.description.clone(),
            price: row.price,
            category_id: row.category_id,
            category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// In-memory implementation of ProductRepository, holding the categories the
/// products join against.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category. Categories have no endpoints in this API; this is
    /// for startup seeding and tests.
    pub async fn seed_category(&self, name: &str) -> Category {
        let mut inner = self.inner.write().await;

        inner.next_category_id += 1;
        let now = Utc::now();
        let category = Category {
            id: inner.next_category_id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };

        inner.categories.insert(category.id, category.clone());

        tracing::info!(category_id = category.id, name = %category.name, "Seeded category");
        category
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let inner = self.inner.read().await;

        let mut rows: Vec<&ProductRow> = inner.products.values().collect();
        rows.sort_by_key(|row| row.id);

        rows.into_iter().map(|row| inner.join(row)).collect()
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let inner = self.inner.read().await;
        inner.products.get(&id).map(|row| inner.join(row)).transpose()
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Option<Product>> {
        let inner = self.inner.read().await;

        let needle = name.to_lowercase();
        inner
            .products
            .values()
            .filter(|row| row.name.to_lowercase() == needle)
            .min_by_key(|row| row.id)
            .map(|row| inner.join(row))
            .transpose()
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut inner = self.inner.write().await;

        if !inner.categories.contains_key(&input.category_id) {
            return Err(ProductError::CategoryNotFound(input.category_id));
        }

        inner.next_product_id += 1;
        let now = Utc::now();
        let row = ProductRow {
            id: inner.next_product_id,
            name: input.name,
            description: input.description,
            price: input.price,
            category_id: input.category_id,
            created_at: now,
            updated_at: now,
        };

        let product = inner.join(&row)?;
        inner.products.insert(row.id, row);

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut inner = self.inner.write().await;

        let mut row = match inner.products.get(&id) {
            Some(row) => row.clone(),
            None => return Ok(None),
        };

        if let Some(category_id) = input.category_id {
            if !inner.categories.contains_key(&category_id) {
                return Err(ProductError::CategoryNotFound(category_id));
            }
        }

        if let Some(name) = input.name {
            row.name = name;
        }
        if let Some(description) = input.description {
            row.description = Some(description);
        }
        if let Some(price) = input.price {
            row.price = price;
        }
        if let Some(category_id) = input.category_id {
            row.category_id = category_id;
        }
        row.updated_at = Utc::now();

        let product = inner.join(&row)?;
        inner.products.insert(id, row);

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(product))
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let mut inner = self.inner.write().await;

        if inner.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
