use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ========== READINGS ==========
        // Append-only: rows are inserted and listed, never updated or deleted.
        manager
            .create_table(
                Table::create()
                    .table(Readings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Readings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Readings::TemperatureC).double().not_null())
                    .col(
                        ColumnDef::new(Readings::CreatedAtUtc)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Readings::Location).string_len(100))
                    .col(ColumnDef::new(Readings::Notes).string_len(500))
                    .to_owned(),
            )
            .await?;

        // Listing is always newest-first
        manager
            .create_index(
                Index::create()
                    .name("idx_readings_created_at_utc")
                    .table(Readings::Table)
                    .col(Readings::CreatedAtUtc)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dropping the table drops its index on every backend
        manager
            .drop_table(Table::drop().table(Readings::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Readings {
    Table,
    Id,
    TemperatureC,
    CreatedAtUtc,
    Location,
    Notes,
}
