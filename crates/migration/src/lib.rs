//! Migrator creating the marketplace tables in dependency order:
//! users first, then orders (reference users), then offers (reference both).
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_user;
mod m20240101_000002_create_order;
mod m20240101_000003_create_offer;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_user::Migration),
            Box::new(m20240101_000002_create_order::Migration),
            Box::new(m20240101_000003_create_offer::Migration),
        ]
    }
}
