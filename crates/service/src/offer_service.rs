use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tracing::info;

use models::offer::{self, OfferFields};
use crate::{errors::ServiceError, fields::parse_fields, record::{Created, RecordService}};

pub const ADDED_MESSAGE: &str = "Новое предложение добавлено!";
pub const DELETED_MESSAGE: &str = "Предложение успешно удалено";

fn updated(o: &offer::Model) -> String { format!("Данные предложения {} успешно обновлены", o.id) }

pub async fn list_offers(db: &DatabaseConnection) -> Result<Vec<offer::Model>, ServiceError> {
    Ok(offer::list_all(db).await?)
}

pub async fn get_offer(db: &DatabaseConnection, id: i32) -> Result<offer::Model, ServiceError> {
    Ok(offer::find(db, id).await?)
}

/// Create an offer; the referenced order and executor must exist.
pub async fn create_offer(db: &DatabaseConnection, fields: OfferFields) -> Result<Created, ServiceError> {
    let created = offer::insert(db, fields).await?;
    info!(entity = offer::ENTITY, id = created.id, order_id = ?created.order_id, event = "created", "offer created");
    Ok(Created { id: created.id, message: ADDED_MESSAGE.to_string() })
}

pub async fn replace_offer(db: &DatabaseConnection, id: i32, fields: OfferFields) -> Result<String, ServiceError> {
    let replaced = offer::replace(db, id, fields).await?;
    info!(entity = offer::ENTITY, id, event = "replaced", "offer replaced");
    Ok(updated(&replaced))
}

pub async fn delete_offer(db: &DatabaseConnection, id: i32) -> Result<String, ServiceError> {
    offer::delete(db, id).await?;
    info!(entity = offer::ENTITY, id, event = "deleted", "offer deleted");
    Ok(DELETED_MESSAGE.to_string())
}

pub struct Offers;

#[async_trait]
impl RecordService for Offers {
    type Record = offer::Model;

    const ENTITY: &'static str = offer::ENTITY;
    const COLLECTION: &'static str = "offers";

    async fn list(db: &DatabaseConnection) -> Result<Vec<offer::Model>, ServiceError> { list_offers(db).await }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<offer::Model, ServiceError> { get_offer(db, id).await }

    async fn create(db: &DatabaseConnection, body: Value) -> Result<Created, ServiceError> {
        create_offer(db, parse_fields(body, OfferFields::NAMES)?).await
    }

    async fn replace(db: &DatabaseConnection, id: i32, body: Value) -> Result<String, ServiceError> {
        replace_offer(db, id, parse_fields(body, OfferFields::NAMES)?).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<String, ServiceError> { delete_offer(db, id).await }
}
