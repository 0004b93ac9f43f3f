use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offer::Table)
                    .if_not_exists()
                    .col(pk_auto(Offer::Id))
                    .col(integer_null(Offer::OrderId))
                    .col(integer_null(Offer::ExecutorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offer_order")
                            .from(Offer::Table, Offer::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offer_executor")
                            .from(Offer::Table, Offer::ExecutorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Offer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Offer { Table, Id, OrderId, ExecutorId }

#[derive(DeriveIden)]
enum Order { Table, Id }

#[derive(DeriveIden)]
enum User { Table, Id }
