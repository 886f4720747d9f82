use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Auctions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Auctions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Auctions::Title).string().not_null())
                    .col(
                        ColumnDef::new(Auctions::IsPaid)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Auctions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Auctions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Auctions {
    Table,
    Id,
    Title,
    IsPaid,
    CreatedAt,
}
