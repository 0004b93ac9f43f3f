use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(string(Order::Name))
                    .col(string_len(Order::Description, 200))
                    .col(string(Order::StartDate))
                    .col(string(Order::EndDate))
                    .col(string_len(Order::Address, 100))
                    .col(integer(Order::Price))
                    .col(integer_null(Order::CustomerId))
                    .col(integer_null(Order::ExecutorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_customer")
                            .from(Order::Table, Order::CustomerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_executor")
                            .from(Order::Table, Order::ExecutorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Order::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Order {
    Table,
    Id,
    Name,
    Description,
    StartDate,
    EndDate,
    Address,
    Price,
    CustomerId,
    ExecutorId,
}

#[derive(DeriveIden)]
enum User { Table, Id }
