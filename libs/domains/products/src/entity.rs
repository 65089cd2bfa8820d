use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the `products` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub stock_quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            created_at: Some(model.created_at.into()),
            updated_at: Some(model.updated_at.into()),
            name: model.name,
            description: model.description,
            price: model.price,
            stock_quantity: model.stock_quantity,
        }
    }
}

impl ActiveModel {
    /// Row for a product that has not been stored yet
    pub(crate) fn for_insert(
        product: crate::models::Product,
        id: String,
        now: DateTimeWithTimeZone,
    ) -> Self {
        Self {
            id: Set(id),
            created_at: Set(now),
            updated_at: Set(now),
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            stock_quantity: Set(product.stock_quantity),
        }
    }

    /// Update of a stored row; `created_at` is left untouched.
    pub(crate) fn for_update(
        product: crate::models::Product,
        id: String,
        now: DateTimeWithTimeZone,
    ) -> Self {
        Self {
            id: Set(id),
            created_at: NotSet,
            updated_at: Set(now),
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            stock_quantity: Set(product.stock_quantity),
        }
    }
}
