//! Creates the `entries` table: the whole ledger lives here.
//!
//! `AUTOINCREMENT` keeps ids strictly increasing and never reused, even
//! after the newest rows are deleted.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Entries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Entries::Kind).string().not_null())
                    .col(ColumnDef::new(Entries::Amount).big_integer().not_null())
                    .col(
                        ColumnDef::new(Entries::Note)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Entries::Date).date().not_null())
                    .check(Expr::col(Entries::Amount).gt(0))
                    .check(Expr::col(Entries::Kind).is_in(["income", "expense"]))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-entries-date")
                    .table(Entries::Table)
                    .col(Entries::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entries::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum Entries {
    Table,
    Id,
    Kind,
    Amount,
    Note,
    Date,
}
