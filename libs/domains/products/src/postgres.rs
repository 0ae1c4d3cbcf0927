use async_trait::async_trait;
use chrono::NaiveDate;
use database::BaseRepository;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::Product,
    repository::ProductRepository,
};

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn db_err(e: DbErr) -> ProductError {
    ProductError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = self.base.find_all().await.map_err(db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_born_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ProductResult<Vec<Product>> {
        // BETWEEN is inclusive on both bounds; NULL birth dates never match.
        let models = entity::Entity::find()
            .filter(entity::Column::BirthDate.between(from, to))
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_name_part(&self, fragment: &str) -> ProductResult<Vec<Product>> {
        // LIKE '%fragment%'; the empty fragment matches every row.
        let models = entity::Entity::find()
            .filter(entity::Column::Name.contains(fragment))
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await.map_err(db_err)?;

        Ok(model.map(Into::into))
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let has_id = product.id.is_some();
        let active_model: entity::ActiveModel = product.into();

        let model = if has_id {
            self.base.update(active_model).await.map_err(db_err)?
        } else {
            self.base.insert(active_model).await.map_err(db_err)?
        };

        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await.map_err(db_err)?;

        Ok(rows_affected > 0)
    }
}
