use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::UserName).string().not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Phone).string().not_null())
                    .col(ColumnDef::new(Users::Address).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Users::ProfileImageUrl).string())
                    .col(ColumnDef::new(Users::BankAccountNumber).string())
                    .col(ColumnDef::new(Users::BankAccountName).string())
                    .col(ColumnDef::new(Users::BankName).string())
                    .col(ColumnDef::new(Users::RazorpayAccountId).string())
                    .col(ColumnDef::new(Users::PaypalEmail).string())
                    .col(
                        ColumnDef::new(Users::MoneySpent)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::AuctionsWon)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Users::OtpCode).string_len(6))
                    .col(ColumnDef::new(Users::OtpExpiresAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // An OTP is stored as a pair: code and expiry are set or cleared together.
                    .check(Expr::cust("(otp_code IS NULL) = (otp_expires_at IS NULL)"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Users::Table)
                    .col(Users::MoneySpent)
                    .name("idx_users_money_spent")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    UserName,
    Email,
    PasswordHash,
    Phone,
    Address,
    Role,
    ProfileImageUrl,
    BankAccountNumber,
    BankAccountName,
    BankName,
    RazorpayAccountId,
    PaypalEmail,
    MoneySpent,
    AuctionsWon,
    OtpCode,
    OtpExpiresAt,
    CreatedAt,
}
