use axum_helpers::JwtAuth;
use domain_products::{InMemoryProductRepository, ProductService};
use domain_users::{AuthService, InMemoryUserRepository};

use crate::config::Config;

/// Category names seeded at startup. Categories have no endpoints; products
/// reference them by id in seeding order.
const SEED_CATEGORIES: [&str; 4] = ["Eletrônicos", "Informática", "Livros", "Esportes"];

/// Shared application state handed to the route modules
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub jwt_auth: JwtAuth,
    pub auth_service: AuthService<InMemoryUserRepository>,
    pub product_repository: InMemoryProductRepository,
    pub product_service: ProductService<InMemoryProductRepository>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let jwt_auth = JwtAuth::new(&config.jwt);
        let auth_service = AuthService::new(InMemoryUserRepository::new());
        let product_repository = InMemoryProductRepository::new();
        let product_service = ProductService::new(product_repository.clone());

        Self {
            config,
            jwt_auth,
            auth_service,
            product_repository,
            product_service,
        }
    }

    /// Seed the read-only category set the products reference.
    pub async fn seed_categories(&self) {
        for name in SEED_CATEGORIES {
            self.product_repository.seed_category(name).await;
        }
    }
}
