//! Startup seeding from JSON files.
//!
//! Each file holds an array of flat field-mappings. Tables are filled users,
//! then orders, then offers, so every foreign key in the seed data can point
//! at a row that is already there. Rows may carry their own `id`.

use std::path::Path;

use anyhow::Context;
use configs::SeedConfig;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tracing::{info, warn};

use models::{offer::{self, OfferFields}, order::{self, OrderFields}, user::{self, UserFields}};
use crate::fields::parse_seed_row;

/// Rows inserted per table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub orders: usize,
    pub offers: usize,
}

/// Read a seed file. A missing file yields no rows.
async fn read_rows(path: &Path) -> anyhow::Result<Vec<Value>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "seed file not found; table left empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };
    serde_json::from_slice(&bytes).with_context(|| format!("{} is not a JSON array", path.display()))
}

async fn seed_users(db: &DatabaseConnection, path: &Path) -> anyhow::Result<usize> {
    let rows = read_rows(path).await?;
    let count = rows.len();
    for (i, row) in rows.into_iter().enumerate() {
        let ctx = || format!("{} row {}", path.display(), i);
        let (id, fields) = parse_seed_row::<UserFields>(row, UserFields::NAMES).with_context(ctx)?;
        match id {
            Some(id) => user::insert_with_id(db, id, fields).await,
            None => user::insert(db, fields).await,
        }
        .with_context(ctx)?;
    }
    Ok(count)
}

async fn seed_orders(db: &DatabaseConnection, path: &Path) -> anyhow::Result<usize> {
    let rows = read_rows(path).await?;
    let count = rows.len();
    for (i, row) in rows.into_iter().enumerate() {
        let ctx = || format!("{} row {}", path.display(), i);
        let (id, fields) = parse_seed_row::<OrderFields>(row, OrderFields::NAMES).with_context(ctx)?;
        match id {
            Some(id) => order::insert_with_id(db, id, fields).await,
            None => order::insert(db, fields).await,
        }
        .with_context(ctx)?;
    }
    Ok(count)
}

async fn seed_offers(db: &DatabaseConnection, path: &Path) -> anyhow::Result<usize> {
    let rows = read_rows(path).await?;
    let count = rows.len();
    for (i, row) in rows.into_iter().enumerate() {
        let ctx = || format!("{} row {}", path.display(), i);
        let (id, fields) = parse_seed_row::<OfferFields>(row, OfferFields::NAMES).with_context(ctx)?;
        match id {
            Some(id) => offer::insert_with_id(db, id, fields).await,
            None => offer::insert(db, fields).await,
        }
        .with_context(ctx)?;
    }
    Ok(count)
}

/// Fill an empty store from the configured seed files.
pub async fn load_seed(db: &DatabaseConnection, cfg: &SeedConfig) -> anyhow::Result<SeedReport> {
    if !cfg.enabled {
        info!(event = "seed_skipped", "seeding disabled");
        return Ok(SeedReport::default());
    }
    let users = seed_users(db, Path::new(&cfg.users)).await?;
    let orders = seed_orders(db, Path::new(&cfg.orders)).await?;
    let offers = seed_offers(db, Path::new(&cfg.offers)).await?;
    models::db::resync_id_sequences(db).await.context("resyncing id sequences")?;
    let report = SeedReport { users, orders, offers };
    info!(event = "seed_loaded", users, orders, offers, "seed data loaded");
    Ok(report)
}
