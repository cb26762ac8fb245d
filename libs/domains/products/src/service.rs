//! Product Service - business logic layer

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service sitting between the API layer and the repository.
///
/// Enforces the one business rule (price strictly positive) and forwards
/// not-found as data rather than as an error.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All products with their category snapshots
    #[instrument(skip(self))]
    pub async fn list(&self) -> ProductResult<Vec<Product>> {
        tracing::info!("Fetching all products");
        self.repository.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        tracing::info!(product_id = id, "Fetching product by id");

        let product = self.repository.find_by_id(id).await?;
        if product.is_none() {
            tracing::warn!(product_id = id, "Product not found");
        }
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn get_by_name(&self, name: &str) -> ProductResult<Option<Product>> {
        tracing::info!(name = %name, "Fetching product by name");

        let product = self.repository.find_by_name(name).await?;
        if product.is_none() {
            tracing::warn!(name = %name, "Product not found");
        }
        Ok(product)
    }

    /// Create a product. The price rule fires before any persistence call.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        if input.price <= Decimal::ZERO {
            tracing::error!(price = %input.price, "Attempted to create product with invalid price");
            return Err(ProductError::PriceNotPositive);
        }

        tracing::info!("Creating new product");
        let product = self.repository.create(input).await?;
        tracing::info!(product_id = product.id, "Product created successfully");
        Ok(product)
    }

    /// Partial update. Loads the record first and answers `None` without
    /// touching persistence when it is absent; the price rule is re-checked
    /// when a price is supplied. Omitted fields keep their prior values.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<Option<Product>> {
        if self.repository.find_by_id(id).await?.is_none() {
            tracing::warn!(product_id = id, "Attempted to update non-existent product");
            return Ok(None);
        }

        if let Some(price) = input.price {
            if price <= Decimal::ZERO {
                tracing::error!(product_id = id, price = %price, "Attempted to update product with invalid price");
                return Err(ProductError::PriceNotPositive);
            }
        }

        tracing::info!(product_id = id, "Updating product");
        self.repository.update(id, input).await
    }

    /// Delete a product. `false` when there was nothing to delete.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ProductResult<bool> {
        tracing::info!(product_id = id, "Attempting to delete product");

        let deleted = self.repository.delete(id).await?;
        if deleted {
            tracing::info!(product_id = id, "Product deleted successfully");
        } else {
            tracing::warn!(product_id = id, "Failed to delete product or product not found");
        }
        Ok(deleted)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryProductRepository, MockProductRepository};

    async fn service_with_category() -> (ProductService<InMemoryProductRepository>, i64) {
        let repo = InMemoryProductRepository::new();
        let category = repo.seed_category("Eletrônicos").await;
        (ProductService::new(repo), category.id)
    }

    fn create_input(category_id: i64, price: Decimal) -> CreateProduct {
        CreateProduct {
            name: "Test".to_string(),
            description: None,
            price,
            category_id,
        }
    }

    #[tokio::test]
    async fn create_then_get_by_id_round_trips() {
        let (service, category_id) = service_with_category().await;

        let created = service
            .create(create_input(category_id, Decimal::from(10)))
            .await
            .unwrap();
        let fetched = service.get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Test");
        assert_eq!(fetched.price, Decimal::from(10));
        assert_eq!(fetched.category_id, category_id);
    }

    #[tokio::test]
    async fn get_by_id_is_idempotent() {
        let (service, category_id) = service_with_category().await;
        let created = service
            .create(create_input(category_id, Decimal::from(10)))
            .await
            .unwrap();

        let first = service.get_by_id(created.id).await.unwrap().unwrap();
        let second = service.get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.updated_at, second.updated_at);
    }

    #[tokio::test]
    async fn create_rejects_non_positive_prices_before_persisting() {
        let (service, category_id) = service_with_category().await;

        for price in [Decimal::ZERO, Decimal::new(-500, 2)] {
            let result = service.create(create_input(category_id, price)).await;
            assert!(matches!(result, Err(ProductError::PriceNotPositive)));
        }

        // Nothing was stored by the rejected calls
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_short_circuits_without_calling_the_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().never();

        let service = ProductService::new(repo);
        let result = service.create(create_input(1, Decimal::ZERO)).await;

        assert!(matches!(result, Err(ProductError::PriceNotPositive)));
    }

    #[tokio::test]
    async fn update_changes_supplied_fields_and_keeps_the_rest() {
        let (service, category_id) = service_with_category().await;
        let created = service
            .create(CreateProduct {
                name: "Original".to_string(),
                description: Some("Descrição original".to_string()),
                price: Decimal::from(10),
                category_id,
            })
            .await
            .unwrap();

        let updated = service
            .update(
                created.id,
                UpdateProduct {
                    name: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.price, created.price);
    }

    #[tokio::test]
    async fn update_of_missing_product_is_none_and_never_writes() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let service = ProductService::new(repo);
        let result = service.update(42, UpdateProduct::default()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn update_with_invalid_price_leaves_the_stored_row_unchanged() {
        let (service, category_id) = service_with_category().await;
        let created = service
            .create(create_input(category_id, Decimal::from(10)))
            .await
            .unwrap();

        let result = service
            .update(
                created.id,
                UpdateProduct {
                    price: Some(Decimal::ZERO),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(ProductError::PriceNotPositive)));

        let stored = service.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.price, Decimal::from(10));
    }

    #[tokio::test]
    async fn delete_of_missing_product_is_false_and_leaves_other_rows() {
        let (service, category_id) = service_with_category().await;
        let created = service
            .create(create_input(category_id, Decimal::from(10)))
            .await
            .unwrap();

        assert!(!service.delete(created.id + 1).await.unwrap());
        assert!(service.get_by_id(created.id).await.unwrap().is_some());
    }
}
