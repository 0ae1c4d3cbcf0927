use chrono::NaiveDate;
use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductDto};
use crate::repository::ProductRepository;

/// Service layer for product operations.
///
/// Every method is a single stateless pass-through: convert the transfer
/// object, issue one repository call, convert back.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Products whose birth date falls inside the inclusive range
    pub async fn products_born_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ProductResult<Vec<Product>> {
        self.repository.find_born_between(from, to).await
    }

    /// Products whose name contains the fragment
    pub async fn products_by_name_part(&self, fragment: &str) -> ProductResult<Vec<Product>> {
        self.repository.find_by_name_part(fragment).await
    }

    /// Create a product; the store assigns the id. Any id in the payload is
    /// ignored.
    pub async fn create_product(&self, dto: ProductDto) -> ProductResult<Product> {
        let mut product = Product::from(dto);
        product.id = None;

        self.repository.save(product).await
    }

    /// Replace a product's fields under the id from the request path.
    ///
    /// The lookup result is discarded; it only rejects unknown ids before
    /// the overwrite that `save` performs. The path id overrides any id in
    /// the payload, and there are no merge semantics: all fields are
    /// replaced by a fresh mapping of the inbound payload.
    pub async fn update_product(&self, id: i32, dto: ProductDto) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let mut product = Product::from(dto);
        product.id = Some(id);

        self.repository.save(product).await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete_by_id(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}
