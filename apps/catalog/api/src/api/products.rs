use axum::Router;
use axum_helpers::auth::RoleGuard;
use domain_products::{
    InMemoryProductRepository, PgProductRepository, ProductService, handlers,
};

pub fn router(state: &crate::state::AppState, guard: RoleGuard) -> Router {
    match &state.db {
        Some(db) => {
            let repository = PgProductRepository::new(db.clone());
            handlers::router(ProductService::new(repository), guard)
        }
        None => {
            let repository = InMemoryProductRepository::new();
            handlers::router(ProductService::new(repository), guard)
        }
    }
}
