use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List every product. Ordering is unspecified, no pagination.
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Products whose birth date falls inside the inclusive range.
    /// Products without a birth date never match.
    async fn find_born_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ProductResult<Vec<Product>>;

    /// Products whose name contains the fragment (case-sensitive).
    /// The empty fragment matches everything.
    async fn find_by_name_part(&self, fragment: &str) -> ProductResult<Vec<Product>>;

    /// Get a product by id
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Insert when the product has no id (the store assigns one), otherwise
    /// overwrite keyed on whatever id is present. Returns the persisted
    /// state.
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Delete by id, returning whether a record was removed.
    async fn delete_by_id(&self, id: i32) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<i32, Product>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by_key(|p| p.id);

        Ok(result)
    }

    async fn find_born_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products
            .values()
            .filter(|p| p.birth_date.is_some_and(|d| from <= d && d <= to))
            .cloned()
            .collect();
        result.sort_by_key(|p| p.id);

        Ok(result)
    }

    async fn find_by_name_part(&self, fragment: &str) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products
            .values()
            .filter(|p| p.name.contains(fragment))
            .cloned()
            .collect();
        result.sort_by_key(|p| p.id);

        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn save(&self, mut product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let id = match product.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        product.id = Some(id);

        // Insert-or-overwrite keyed on the id; no merge with prior state.
        products.insert(id, product.clone());

        Ok(product)
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        Ok(products.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, amount: i32, birth_date: Option<NaiveDate>) -> Product {
        Product {
            id: None,
            name: name.to_string(),
            amount,
            birth_date,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.save(product("Widget", 10, None)).await.unwrap();
        let second = repo.save(product("Gadget", 3, None)).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn test_save_with_existing_id_overwrites() {
        let repo = InMemoryProductRepository::new();

        let created = repo.save(product("Widget", 10, None)).await.unwrap();
        let id = created.id.unwrap();

        let updated = repo
            .save(Product {
                id: Some(id),
                name: "Widget".to_string(),
                amount: 25,
                birth_date: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.amount, 25);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    // save() with an id nothing assigned is a blind upsert: the record
    // appears at that id. Callers that want update-must-exist semantics
    // probe with find_by_id first (see ProductService::update_product).
    #[tokio::test]
    async fn test_save_with_unknown_id_inserts_blindly() {
        let repo = InMemoryProductRepository::new();

        let saved = repo
            .save(Product {
                id: Some(42),
                name: "Ghost".to_string(),
                amount: 1,
                birth_date: None,
            })
            .await
            .unwrap();

        assert_eq!(saved.id, Some(42));
        assert!(repo.find_by_id(42).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_find_born_between_is_inclusive_and_skips_dateless() {
        let repo = InMemoryProductRepository::new();

        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        repo.save(product("a", 1, Some(d(2020, 1, 1)))).await.unwrap();
        repo.save(product("b", 1, Some(d(2020, 6, 15)))).await.unwrap();
        repo.save(product("c", 1, Some(d(2020, 12, 31)))).await.unwrap();
        repo.save(product("d", 1, Some(d(2021, 1, 1)))).await.unwrap();
        repo.save(product("e", 1, None)).await.unwrap();

        let result = repo
            .find_born_between(d(2020, 1, 1), d(2020, 12, 31))
            .await
            .unwrap();

        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_find_by_name_part_empty_fragment_matches_all() {
        let repo = InMemoryProductRepository::new();

        repo.save(product("Widget", 1, None)).await.unwrap();
        repo.save(product("Gadget", 1, None)).await.unwrap();

        assert_eq!(repo.find_by_name_part("").await.unwrap().len(), 2);
        assert_eq!(repo.find_by_name_part("dge").await.unwrap().len(), 1);
        assert_eq!(repo.find_by_name_part("widget").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let repo = InMemoryProductRepository::new();

        let created = repo.save(product("Widget", 10, None)).await.unwrap();
        let id = created.id.unwrap();

        assert!(repo.delete_by_id(id).await.unwrap());
        assert!(!repo.delete_by_id(id).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
