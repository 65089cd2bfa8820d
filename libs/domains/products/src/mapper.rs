use crate::models::{CreateProductDto, Product, ProductDto};

/// Stateless conversions between [`Product`] and its DTOs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductMapper;

impl ProductMapper {
    /// An unsaved product maps to an empty id.
    pub fn entity_to_dto(&self, product: &Product) -> ProductDto {
        ProductDto {
            id: product.id.clone().unwrap_or_default(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
        }
    }

    pub fn create_dto_to_entity(&self, dto: CreateProductDto) -> Product {
        Product::new(dto.name, dto.description, dto.price, dto.stock_quantity)
    }
}
