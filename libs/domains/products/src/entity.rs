use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::models::Product;

/// SeaORM entity for the `produto` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "produto")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub amount: i32,
    pub birth_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            amount: model.amount,
            birth_date: model.birth_date,
        }
    }
}

// A product without an id becomes an insert; a present id keys an update.
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map_or(NotSet, Set),
            name: Set(product.name),
            amount: Set(product.amount),
            birth_date: Set(product.birth_date),
        }
    }
}
