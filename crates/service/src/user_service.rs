use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tracing::info;

use models::user::{self, UserFields};
use crate::{errors::ServiceError, fields::parse_fields, record::{Created, RecordService}};

pub const DELETED_MESSAGE: &str = "Выбранный пользователь удален";

fn welcome(u: &user::Model) -> String { format!("Welcome, {}!", u.first_name) }

fn updated(u: &user::Model) -> String { format!("Данные пользователя {} {} обновлены", u.first_name, u.last_name) }

/// List all users in id order.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, ServiceError> {
    Ok(user::list_all(db).await?)
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<user::Model, ServiceError> {
    Ok(user::find(db, id).await?)
}

/// Create a user from a complete field set.
pub async fn create_user(db: &DatabaseConnection, fields: UserFields) -> Result<Created, ServiceError> {
    let created = user::insert(db, fields).await?;
    info!(entity = user::ENTITY, id = created.id, event = "created", "user created");
    Ok(Created { id: created.id, message: welcome(&created) })
}

/// Overwrite every field of a user.
pub async fn replace_user(db: &DatabaseConnection, id: i32, fields: UserFields) -> Result<String, ServiceError> {
    let replaced = user::replace(db, id, fields).await?;
    info!(entity = user::ENTITY, id, event = "replaced", "user replaced");
    Ok(updated(&replaced))
}

/// Delete a user.
pub async fn delete_user(db: &DatabaseConnection, id: i32) -> Result<String, ServiceError> {
    user::delete(db, id).await?;
    info!(entity = user::ENTITY, id, event = "deleted", "user deleted");
    Ok(DELETED_MESSAGE.to_string())
}

pub struct Users;

#[async_trait]
impl RecordService for Users {
    type Record = user::Model;

    const ENTITY: &'static str = user::ENTITY;
    const COLLECTION: &'static str = "users";

    async fn list(db: &DatabaseConnection) -> Result<Vec<user::Model>, ServiceError> { list_users(db).await }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<user::Model, ServiceError> { get_user(db, id).await }

    async fn create(db: &DatabaseConnection, body: Value) -> Result<Created, ServiceError> {
        create_user(db, parse_fields(body, UserFields::NAMES)?).await
    }

    async fn replace(db: &DatabaseConnection, id: i32, body: Value) -> Result<String, ServiceError> {
        replace_user(db, id, parse_fields(body, UserFields::NAMES)?).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<String, ServiceError> { delete_user(db, id).await }
}
