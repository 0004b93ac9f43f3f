use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const ENTITY: &str = "user";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Every user column except the store-assigned `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

impl UserFields {
    pub const NAMES: &'static [&'static str] = &["first_name", "last_name", "age", "email", "role", "phone"];

    fn apply(self, am: &mut ActiveModel) {
        am.first_name = Set(self.first_name);
        am.last_name = Set(self.last_name);
        am.age = Set(self.age);
        am.email = Set(self.email);
        am.role = Set(self.role);
        am.phone = Set(self.phone);
    }
}

impl From<Model> for UserFields {
    fn from(m: Model) -> Self {
        Self { first_name: m.first_name, last_name: m.last_name, age: m.age, email: m.email, role: m.role, phone: m.phone }
    }
}

fn new_active(id: Option<i32>, fields: UserFields) -> ActiveModel {
    let mut am = ActiveModel {
        id: id.map_or(NotSet, Set),
        first_name: NotSet,
        last_name: NotSet,
        age: NotSet,
        email: NotSet,
        role: NotSet,
        phone: NotSet,
    };
    fields.apply(&mut am);
    am
}

/// Store a new user; the id is assigned by the database.
pub async fn insert(db: &DatabaseConnection, fields: UserFields) -> Result<Model, ModelError> {
    new_active(None, fields).insert(db).await.map_err(ModelError::db)
}

/// Store a user under a caller-chosen id (seed data carries its own ids).
pub async fn insert_with_id(db: &DatabaseConnection, id: i32, fields: UserFields) -> Result<Model, ModelError> {
    new_active(Some(id), fields).insert(db).await.map_err(ModelError::db)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Model, ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ModelError::db)?
        .ok_or_else(|| ModelError::not_found(ENTITY, id))
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await.map_err(ModelError::db)?.is_some())
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find().order_by_asc(Column::Id).all(db).await.map_err(ModelError::db)
}

/// Overwrite every column of an existing user.
pub async fn replace(db: &DatabaseConnection, id: i32, fields: UserFields) -> Result<Model, ModelError> {
    let txn = db.begin().await.map_err(ModelError::db)?;
    let mut am: ActiveModel = find(&txn, id).await?.into();
    fields.apply(&mut am);
    let updated = am.update(&txn).await.map_err(ModelError::db)?;
    txn.commit().await.map_err(ModelError::db)?;
    Ok(updated)
}

/// Remove a user. Orders and offers pointing at it keep existing with the
/// reference set to null.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(ModelError::db)?;
    if res.rows_affected == 0 {
        return Err(ModelError::not_found(ENTITY, id));
    }
    Ok(())
}
