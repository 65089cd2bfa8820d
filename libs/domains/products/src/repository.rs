use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::Product;

/// Storage contract for products.
///
/// `save` assigns `id`, `created_at` and `updated_at` on the first save and
/// only refreshes `updated_at` on later saves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in the store's natural order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    async fn save(&self, product: Product) -> ProductResult<Product>;

    async fn delete(&self, product: &Product) -> ProductResult<()>;
}

/// Process-local repository kept in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .find(|p| p.id.as_deref() == Some(id))
            .cloned())
    }

    async fn save(&self, mut product: Product) -> ProductResult<Product> {
        let now = Utc::now();
        let mut products = self.products.write().await;

        let existing = product
            .id
            .as_deref()
            .and_then(|id| products.iter().position(|p| p.id.as_deref() == Some(id)));

        match existing {
            Some(index) => {
                product.created_at = products[index].created_at;
                product.updated_at = Some(now);
                products[index] = product.clone();
                tracing::debug!(product_id = ?product.id, "Updated product");
            }
            None => {
                let id = product
                    .id
                    .get_or_insert_with(|| Uuid::new_v4().to_string())
                    .clone();
                product.created_at = Some(now);
                product.updated_at = Some(now);
                products.push(product.clone());
                tracing::debug!(product_id = %id, "Created product");
            }
        }

        Ok(product)
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let mut products = self.products.write().await;
        products.retain(|p| p.id != product.id);
        tracing::debug!(product_id = ?product.id, "Deleted product");
        Ok(())
    }
}
