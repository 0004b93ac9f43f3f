use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tracing::info;

use models::order::{self, OrderFields};
use crate::{errors::ServiceError, fields::parse_fields, record::{Created, RecordService}};

pub const DELETED_MESSAGE: &str = "Заказ успешно удален";

fn added(o: &order::Model) -> String { format!("Новый заказ {} добавлен", o.name) }

fn updated(o: &order::Model) -> String { format!("Данные заказа {} обновлены", o.name) }

pub async fn list_orders(db: &DatabaseConnection) -> Result<Vec<order::Model>, ServiceError> {
    Ok(order::list_all(db).await?)
}

pub async fn get_order(db: &DatabaseConnection, id: i32) -> Result<order::Model, ServiceError> {
    Ok(order::find(db, id).await?)
}

/// Create an order; referenced users must exist.
pub async fn create_order(db: &DatabaseConnection, fields: OrderFields) -> Result<Created, ServiceError> {
    let created = order::insert(db, fields).await?;
    info!(entity = order::ENTITY, id = created.id, event = "created", "order created");
    Ok(Created { id: created.id, message: added(&created) })
}

pub async fn replace_order(db: &DatabaseConnection, id: i32, fields: OrderFields) -> Result<String, ServiceError> {
    let replaced = order::replace(db, id, fields).await?;
    info!(entity = order::ENTITY, id, event = "replaced", "order replaced");
    Ok(updated(&replaced))
}

pub async fn delete_order(db: &DatabaseConnection, id: i32) -> Result<String, ServiceError> {
    order::delete(db, id).await?;
    info!(entity = order::ENTITY, id, event = "deleted", "order deleted");
    Ok(DELETED_MESSAGE.to_string())
}

pub struct Orders;

#[async_trait]
impl RecordService for Orders {
    type Record = order::Model;

    const ENTITY: &'static str = order::ENTITY;
    const COLLECTION: &'static str = "orders";

    async fn list(db: &DatabaseConnection) -> Result<Vec<order::Model>, ServiceError> { list_orders(db).await }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<order::Model, ServiceError> { get_order(db, id).await }

    async fn create(db: &DatabaseConnection, body: Value) -> Result<Created, ServiceError> {
        create_order(db, parse_fields(body, OrderFields::NAMES)?).await
    }

    async fn replace(db: &DatabaseConnection, id: i32, body: Value) -> Result<String, ServiceError> {
        replace_order(db, id, parse_fields(body, OrderFields::NAMES)?).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<String, ServiceError> { delete_order(db, id).await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ann_body, get_db, order_body};
    use crate::user_service::Users;

    #[tokio::test]
    async fn order_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let customer = Users::create(&db, ann_body()).await?;

        let created = Orders::create(&db, order_body(Some(customer.id), None)).await?;
        assert_eq!(created.message, "Новый заказ Покраска забора добавлен");

        let found = Orders::get(&db, created.id).await?;
        assert_eq!(found.customer_id, Some(customer.id));
        assert_eq!(found.executor_id, None);

        let mut body = order_body(Some(customer.id), Some(customer.id));
        body["name"] = "Ремонт крыши".into();
        body["price"] = 9000.into();
        let msg = Orders::replace(&db, created.id, body).await?;
        assert_eq!(msg, "Данные заказа Ремонт крыши обновлены");

        let found = Orders::get(&db, created.id).await?;
        assert_eq!(found.price, 9000);
        assert_eq!(found.executor_id, Some(customer.id));

        assert_eq!(Orders::delete(&db, created.id).await?, DELETED_MESSAGE);
        assert!(Orders::list(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn replace_without_price_leaves_order_unchanged() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = Orders::create(&db, order_body(None, None)).await?;
        let before = Orders::get(&db, created.id).await?;

        let mut body = order_body(None, None);
        body["name"] = "changed".into();
        body.as_object_mut().unwrap().remove("price");
        let err = Orders::replace(&db, created.id, body).await.unwrap_err();
        assert!(matches!(err, ServiceError::MissingField(ref f) if f == "price"));

        assert_eq!(Orders::get(&db, created.id).await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn dangling_customer_is_validation_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = Orders::create(&db, order_body(Some(77), None)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m.contains("customer_id 77")));
        Ok(())
    }
}
