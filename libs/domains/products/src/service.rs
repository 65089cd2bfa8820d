//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::mapper::ProductMapper;
use crate::models::{CreateProductDto, Product, ProductDto, UpdateProductDto};
use crate::repository::ProductRepository;

/// Product operations over a [`ProductRepository`].
///
/// Input DTOs are expected to be validated already; the HTTP layer does
/// that through `ValidatedJson`.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    mapper: ProductMapper,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            mapper: ProductMapper,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ProductResult<Vec<ProductDto>> {
        let products = self.repository.find_all().await?;
        Ok(products
            .iter()
            .map(|p| self.mapper.entity_to_dto(p))
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> ProductResult<ProductDto> {
        let product = self.find_by_id_or_fail(id).await?;
        Ok(self.mapper.entity_to_dto(&product))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create(&self, input: CreateProductDto) -> ProductResult<ProductDto> {
        let product = self.mapper.create_dto_to_entity(input);
        let saved = self.repository.save(product).await?;
        Ok(self.mapper.entity_to_dto(&saved))
    }

    #[instrument(skip(self, input), fields(product_id = %input.id))]
    pub async fn update(&self, input: UpdateProductDto) -> ProductResult<ProductDto> {
        let mut product = self.find_by_id_or_fail(&input.id).await?;

        product.name = input.name;
        product.description = input.description;
        product.price = input.price;
        product.stock_quantity = input.stock_quantity;

        let saved = self.repository.save(product).await?;
        Ok(self.mapper.entity_to_dto(&saved))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ProductResult<()> {
        let product = self.find_by_id_or_fail(id).await?;
        self.repository.delete(&product).await
    }

    async fn find_by_id_or_fail(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            mapper: self.mapper,
        }
    }
}
