use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Produto::Table)
                    .if_not_exists()
                    .col(pk_auto(Produto::Id))
                    .col(string(Produto::Name))
                    .col(integer(Produto::Amount))
                    .col(date_null(Produto::BirthDate))
                    .to_owned(),
            )
            .await?;

        // The date range filter is the only non-key lookup worth an index.
        manager
            .create_index(
                Index::create()
                    .name("idx_produto_birth_date")
                    .table(Produto::Table)
                    .col(Produto::BirthDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Produto::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Produto {
    Table,
    Id,
    Name,
    Amount,
    BirthDate,
}
