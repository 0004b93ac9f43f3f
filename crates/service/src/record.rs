use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::Value;

use crate::errors::ServiceError;

/// Outcome of a create: the assigned id plus the confirmation text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Created {
    pub id: i32,
    pub message: String,
}

/// The five operations every entity exposes to the HTTP layer.
///
/// Implemented by the zero-sized `Users`, `Orders` and `Offers` markers so the
/// router can mount one generic handler set per entity.
#[async_trait]
pub trait RecordService: Send + Sync + 'static {
    type Record: Serialize + Send + Sync + 'static;

    /// Singular entity name used in logs and error messages.
    const ENTITY: &'static str;
    /// Path segment of the collection, e.g. `users`.
    const COLLECTION: &'static str;

    async fn list(db: &DatabaseConnection) -> Result<Vec<Self::Record>, ServiceError>;
    async fn get(db: &DatabaseConnection, id: i32) -> Result<Self::Record, ServiceError>;
    async fn create(db: &DatabaseConnection, body: Value) -> Result<Created, ServiceError>;
    async fn replace(db: &DatabaseConnection, id: i32, body: Value) -> Result<String, ServiceError>;
    async fn delete(db: &DatabaseConnection, id: i32) -> Result<String, ServiceError>;
}
