use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, DatabaseTransaction, QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, order, user};

pub const ENTITY: &str = "offer";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "offer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: Option<i32>,
    pub executor_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Order, Executor }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Order => Entity::belongs_to(order::Entity).from(Column::OrderId).to(order::Column::Id).into(),
            Relation::Executor => Entity::belongs_to(user::Entity).from(Column::ExecutorId).to(user::Column::Id).into(),
        }
    }
}

impl Related<order::Entity> for Entity {
    fn to() -> RelationDef { Relation::Order.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Every offer column except the store-assigned `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferFields {
    pub order_id: Option<i32>,
    pub executor_id: Option<i32>,
}

impl OfferFields {
    pub const NAMES: &'static [&'static str] = &["order_id", "executor_id"];

    async fn check_references(&self, txn: &DatabaseTransaction) -> Result<(), ModelError> {
        if let Some(id) = self.order_id {
            if !order::exists(txn, id).await? {
                return Err(ModelError::DanglingReference { field: "order_id", id, entity: order::ENTITY });
            }
        }
        if let Some(id) = self.executor_id {
            if !user::exists(txn, id).await? {
                return Err(ModelError::DanglingReference { field: "executor_id", id, entity: user::ENTITY });
            }
        }
        Ok(())
    }

    fn apply(self, am: &mut ActiveModel) {
        am.order_id = Set(self.order_id);
        am.executor_id = Set(self.executor_id);
    }
}

impl From<Model> for OfferFields {
    fn from(m: Model) -> Self {
        Self { order_id: m.order_id, executor_id: m.executor_id }
    }
}

async fn insert_active(db: &DatabaseConnection, id: Option<i32>, fields: OfferFields) -> Result<Model, ModelError> {
    let txn = db.begin().await.map_err(ModelError::db)?;
    fields.check_references(&txn).await?;
    let mut am = ActiveModel { id: id.map_or(NotSet, Set), order_id: NotSet, executor_id: NotSet };
    fields.apply(&mut am);
    let created = am.insert(&txn).await.map_err(ModelError::db)?;
    txn.commit().await.map_err(ModelError::db)?;
    Ok(created)
}

pub async fn insert(db: &DatabaseConnection, fields: OfferFields) -> Result<Model, ModelError> {
    insert_active(db, None, fields).await
}

pub async fn insert_with_id(db: &DatabaseConnection, id: i32, fields: OfferFields) -> Result<Model, ModelError> {
    insert_active(db, Some(id), fields).await
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Model, ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ModelError::db)?
        .ok_or_else(|| ModelError::not_found(ENTITY, id))
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find().order_by_asc(Column::Id).all(db).await.map_err(ModelError::db)
}

pub async fn replace(db: &DatabaseConnection, id: i32, fields: OfferFields) -> Result<Model, ModelError> {
    let txn = db.begin().await.map_err(ModelError::db)?;
    let mut am: ActiveModel = find(&txn, id).await?.into();
    fields.check_references(&txn).await?;
    fields.apply(&mut am);
    let updated = am.update(&txn).await.map_err(ModelError::db)?;
    txn.commit().await.map_err(ModelError::db)?;
    Ok(updated)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(ModelError::db)?;
    if res.rows_affected == 0 {
        return Err(ModelError::not_found(ENTITY, id));
    }
    Ok(())
}
