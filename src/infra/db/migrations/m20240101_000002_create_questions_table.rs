//! Migration: Create questions table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_categories_table::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::Question).text().not_null())
                    .col(ColumnDef::new(Questions::Answer).text().not_null())
                    .col(ColumnDef::new(Questions::Category).integer().not_null())
                    .col(ColumnDef::new(Questions::Difficulty).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questions_category")
                            .from(Questions::Table, Questions::Category)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Category listings and quiz draws filter on this column
        manager
            .create_index(
                Index::create()
                    .name("idx_questions_category")
                    .table(Questions::Table)
                    .col(Questions::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_questions_category")
                    .table(Questions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
    Question,
    Answer,
    Category,
    Difficulty,
}
