//! Migration: Seed the standard trivia categories.

use sea_orm::{ConnectionTrait, DatabaseBackend};
use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_categories_table::Categories;

/// Seeded categories, in id order
pub const SEED_CATEGORIES: &[(i32, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Categories::Table)
            .columns([Categories::Id, Categories::Type]);
        for (id, label) in SEED_CATEGORIES {
            insert.values_panic([(*id).into(), (*label).into()]);
        }
        manager.exec_stmt(insert).await?;

        // Explicit ids leave the serial sequence behind; move it past the seed
        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared(
                    "SELECT setval(pg_get_serial_sequence('categories', 'id'), \
                     (SELECT MAX(id) FROM categories))",
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids: Vec<i32> = SEED_CATEGORIES.iter().map(|(id, _)| *id).collect();
        let delete = Query::delete()
            .from_table(Categories::Table)
            .and_where(Expr::col(Categories::Id).is_in(ids))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
