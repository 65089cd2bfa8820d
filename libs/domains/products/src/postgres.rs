use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    prelude::DateTimeWithTimeZone,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::Product,
    repository::ProductRepository,
};

/// PostgreSQL-backed [`ProductRepository`] using SeaORM.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert(&self, product: Product, id: String) -> ProductResult<Product> {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let model = entity::ActiveModel::for_insert(product, id, now)
            .insert(&self.db)
            .await
            .map_err(db_error)?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }
}

fn db_error(err: DbErr) -> ProductError {
    ProductError::Database(err.to_string())
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(model.map(Into::into))
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let Some(id) = product.id.clone() else {
            return self.insert(product, Uuid::new_v4().to_string()).await;
        };

        let now: DateTimeWithTimeZone = Utc::now().into();
        match entity::ActiveModel::for_update(product.clone(), id.clone(), now)
            .update(&self.db)
            .await
        {
            Ok(model) => {
                tracing::info!(product_id = %model.id, "Updated product");
                Ok(model.into())
            }
            // Caller-supplied id that was never stored
            Err(DbErr::RecordNotUpdated) => self.insert(product, id).await,
            Err(e) => Err(db_error(e)),
        }
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let Some(id) = product.id.clone() else {
            return Ok(());
        };

        let result = entity::Entity::delete_by_id(id.clone())
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        tracing::info!(product_id = %id, rows = result.rows_affected, "Deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn timestamp(secs: i64) -> DateTimeWithTimeZone {
        FixedOffset::east_opt(0)
            .and_then(|tz| tz.timestamp_opt(secs, 0).single())
            .unwrap()
    }

    fn row(id: &str, name: &str) -> entity::Model {
        entity::Model {
            id: id.to_string(),
            created_at: timestamp(1_700_000_000),
            updated_at: timestamp(1_700_000_100),
            name: name.to_string(),
            description: format!("{name} description"),
            price: 10.0,
            stock_quantity: 5,
        }
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("a", "test"), row("b", "test2")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let products = repo.find_all().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].id.as_deref(), Some("b"));
        assert_eq!(products[1].description, "test2 description");
        assert!(products[0].created_at.is_some());
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert_eq!(repo.find_by_id("id1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_new_product_inserts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("generated", "test")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let saved = repo
            .save(Product::new("test", "test description", 10.0, 5))
            .await
            .unwrap();
        assert_eq!(saved.id.as_deref(), Some("generated"));
    }

    #[tokio::test]
    async fn test_save_existing_product_updates() {
        let mut updated = row("id1", "renamed");
        updated.updated_at = timestamp(1_700_000_500);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![updated]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let mut product: Product = row("id1", "test").into();
        product.name = "renamed".into();
        let saved = repo.save(product).await.unwrap();

        assert_eq!(saved.name, "renamed");
        assert_eq!(saved.created_at, Some(timestamp(1_700_000_000).into()));
    }

    #[tokio::test]
    async fn test_delete_executes() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = PgProductRepository::new(db);

        repo.delete(&row("id1", "test").into()).await.unwrap();
    }

    #[tokio::test]
    async fn test_query_error_maps_to_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let err = repo.find_all().await.unwrap_err();
        assert_eq!(err.to_string().matches("Database error").count(), 1);
        assert!(matches!(err, ProductError::Database(msg) if msg.contains("connection reset")));
    }
}
