//! Product entity and its wire DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{not_blank, null_as_default};

/// A stored product.
///
/// `id`, `created_at` and `updated_at` are owned by the repository: they are
/// `None` until the first save and `id`/`created_at` never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i32,
}

impl Product {
    /// Unsaved product with no identity or timestamps
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        stock_quantity: i32,
    ) -> Self {
        Self {
            id: None,
            created_at: None,
            updated_at: None,
            name: name.into(),
            description: description.into(),
            price,
            stock_quantity,
        }
    }
}

/// Client-visible product representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i32,
}

/// Request body for `POST /api/v1/products/`.
///
/// Missing or null fields read as blank or zero so validation reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(custom(function = "not_blank"))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[validate(range(min = 0.1, message = "must be greater than or equal to 0.1"))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,

    #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_quantity: i32,
}

/// Request body for `PUT /api/v1/products/`.
///
/// The price floor is stricter than on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    #[validate(custom(function = "not_blank"))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[validate(custom(function = "not_blank"))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[validate(range(min = 1.0, message = "must be greater than or equal to 1"))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,

    #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_dto_uses_camel_case() {
        let dto = ProductDto {
            id: "id1".into(),
            name: "test".into(),
            description: "description".into(),
            price: 10.0,
            stock_quantity: 3,
        };

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "id": "id1",
                "name": "test",
                "description": "description",
                "price": 10.0,
                "stockQuantity": 3
            })
        );
    }

    #[test]
    fn test_create_dto_missing_fields_default_to_blank() {
        let dto: CreateProductDto =
            serde_json::from_value(json!({"name": "test", "price": 1.0})).unwrap();
        assert_eq!(dto.name, "test");
        assert_eq!(dto.description, "");
        assert_eq!(dto.stock_quantity, 0);
    }

    #[test]
    fn test_create_dto_null_fields_default_to_blank() {
        let dto: CreateProductDto = serde_json::from_value(json!({
            "name": null,
            "description": "d",
            "price": null,
            "stockQuantity": null
        }))
        .unwrap();
        assert_eq!(dto.name, "");
        assert_eq!(dto.price, 0.0);
        assert_eq!(dto.stock_quantity, 0);
    }

    #[test]
    fn test_create_dto_wrong_type_is_rejected() {
        let result: Result<CreateProductDto, _> =
            serde_json::from_value(json!({"name": "test", "price": "free"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_dto_reads_camel_case() {
        let dto: UpdateProductDto = serde_json::from_value(json!({
            "id": "id1",
            "name": "n",
            "description": "d",
            "price": 2.5,
            "stockQuantity": 4
        }))
        .unwrap();
        assert_eq!(dto.stock_quantity, 4);
    }

    #[test]
    fn test_new_product_is_unsaved() {
        let product = Product::new("name", "description", 1.0, 1);
        assert!(product.id.is_none());
        assert!(product.created_at.is_none());
        assert!(product.updated_at.is_none());
    }
}
