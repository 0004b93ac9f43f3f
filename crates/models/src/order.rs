use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, DatabaseTransaction, QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, offer, user};

pub const ENTITY: &str = "order";
pub const DESCRIPTION_MAX_CHARS: usize = 200;
pub const ADDRESS_MAX_CHARS: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i32,
    pub customer_id: Option<i32>,
    pub executor_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Customer, Executor, Offers }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(user::Entity).from(Column::CustomerId).to(user::Column::Id).into(),
            Relation::Executor => Entity::belongs_to(user::Entity).from(Column::ExecutorId).to(user::Column::Id).into(),
            Relation::Offers => Entity::has_many(offer::Entity).into(),
        }
    }
}

impl Related<offer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Offers.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Every order column except the store-assigned `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFields {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i32,
    pub customer_id: Option<i32>,
    pub executor_id: Option<i32>,
}

impl OrderFields {
    pub const NAMES: &'static [&'static str] = &[
        "name",
        "description",
        "start_date",
        "end_date",
        "address",
        "price",
        "customer_id",
        "executor_id",
    ];

    /// Enforce the column length bounds of `description` and `address`.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ModelError::Validation(format!("description exceeds {DESCRIPTION_MAX_CHARS} characters")));
        }
        if self.address.chars().count() > ADDRESS_MAX_CHARS {
            return Err(ModelError::Validation(format!("address exceeds {ADDRESS_MAX_CHARS} characters")));
        }
        Ok(())
    }

    async fn check_references(&self, txn: &DatabaseTransaction) -> Result<(), ModelError> {
        for (field, id) in [("customer_id", self.customer_id), ("executor_id", self.executor_id)] {
            if let Some(id) = id {
                if !user::exists(txn, id).await? {
                    return Err(ModelError::DanglingReference { field, id, entity: user::ENTITY });
                }
            }
        }
        Ok(())
    }

    fn apply(self, am: &mut ActiveModel) {
        am.name = Set(self.name);
        am.description = Set(self.description);
        am.start_date = Set(self.start_date);
        am.end_date = Set(self.end_date);
        am.address = Set(self.address);
        am.price = Set(self.price);
        am.customer_id = Set(self.customer_id);
        am.executor_id = Set(self.executor_id);
    }
}

impl From<Model> for OrderFields {
    fn from(m: Model) -> Self {
        Self {
            name: m.name,
            description: m.description,
            start_date: m.start_date,
            end_date: m.end_date,
            address: m.address,
            price: m.price,
            customer_id: m.customer_id,
            executor_id: m.executor_id,
        }
    }
}

async fn insert_active(db: &DatabaseConnection, id: Option<i32>, fields: OrderFields) -> Result<Model, ModelError> {
    fields.validate()?;
    let txn = db.begin().await.map_err(ModelError::db)?;
    fields.check_references(&txn).await?;
    let mut am = ActiveModel {
        id: id.map_or(NotSet, Set),
        name: NotSet,
        description: NotSet,
        start_date: NotSet,
        end_date: NotSet,
        address: NotSet,
        price: NotSet,
        customer_id: NotSet,
        executor_id: NotSet,
    };
    fields.apply(&mut am);
    let created = am.insert(&txn).await.map_err(ModelError::db)?;
    txn.commit().await.map_err(ModelError::db)?;
    Ok(created)
}

/// Store a new order after checking bounds and user references.
pub async fn insert(db: &DatabaseConnection, fields: OrderFields) -> Result<Model, ModelError> {
    insert_active(db, None, fields).await
}

pub async fn insert_with_id(db: &DatabaseConnection, id: i32, fields: OrderFields) -> Result<Model, ModelError> {
    insert_active(db, Some(id), fields).await
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

/// Offers placed on one order, in id order.
pub async fn offers_of(db: &DatabaseConnection, id: i32) -> Result<Vec<offer::Model>, ModelError> {
    let found = find(db, id).await?;
    found
        .find_related(offer::Entity)
        .order_by_asc(offer::Column::Id)
        .all(db)
        .await
        .map_err(ModelError::db)
}

/// Overwrite every column of an existing order.
pub async fn replace(db: &DatabaseConnection, id: i32, fields: OrderFields) -> Result<Model, ModelError> {
    fields.validate()?;
    let txn = db.begin().await.map_err(ModelError::db)?;
    let mut am: ActiveModel = find(&txn, id).await?.into();
    fields.check_references(&txn).await?;
    fields.apply(&mut am);
    let updated = am.update(&txn).await.map_err(ModelError::db)?;
    txn.commit().await.map_err(ModelError::db)?;
    Ok(updated)
}

/// Remove an order; offers placed on it keep existing with `order_id` null.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(ModelError::db)?;
    if res.rows_affected == 0 {
        return Err(ModelError::not_found(ENTITY, id));
    }
    Ok(())
}
