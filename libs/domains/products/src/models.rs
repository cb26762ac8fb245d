use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Product category. Categories are managed outside this API; products
/// reference them and reads embed a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product entity, always carrying its category snapshot
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the store
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: i64,
    /// Category the product belongs to, joined on every read
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255, message = "O nome do produto é obrigatório."))]
    pub name: String,
    pub description: Option<String>,
    #[validate(custom(function = price_is_positive))]
    pub price: Decimal,
    pub category_id: i64,
}

/// DTO for partial product updates. Omitted fields keep their prior values.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 255, message = "O nome do produto é obrigatório."))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = price_is_positive))]
    pub price: Option<Decimal>,
    pub category_id: Option<i64>,
}

impl UpdateProduct {
    /// True when the payload supplied no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category_id.is_none()
    }
}

fn price_is_positive(price: &Decimal) -> Result<(), ValidationError> {
    if *price > Decimal::ZERO {
        return Ok(());
    }

    let mut error = ValidationError::new("price_positive");
    error.message = Some("O preço deve ser maior que zero.".into());
    Err(error)
}

/// Body for the product list endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductsEnvelope {
    pub success: bool,
    pub data: Vec<Product>,
}

/// Body for single-product reads and writes
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Product,
}

impl ProductEnvelope {
    pub fn data(product: Product) -> Self {
        Self {
            success: true,
            message: None,
            data: product,
        }
    }

    pub fn with_message(message: impl Into<String>, product: Product) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: product,
        }
    }
}

/// Query parameters for the search-by-name endpoint
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Exact product name, matched case-insensitively
    pub name: Option<String>,
}
