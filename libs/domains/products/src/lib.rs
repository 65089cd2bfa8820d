//! Products Domain
//!
//! CRUD over a single product resource.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, body validation, role guard
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Fetch-or-fail, mutate, persist, map
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + in-memory and PostgreSQL implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, mapper
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::auth::{AuthConfig, RoleGuard};
//! use domain_products::{InMemoryProductRepository, ProductService, handlers};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuthConfig::new("0123456789abcdef0123456789abcdef")?;
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let router = handlers::router(service, RoleGuard::from_config(&config));
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{ProductError, ProductResult};
pub use mapper::ProductMapper;
pub use models::{CreateProductDto, Product, ProductDto, UpdateProductDto};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use validation::{FieldViolation, ValidatedJson};
