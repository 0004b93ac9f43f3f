#![cfg(test)]
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

/// Fresh in-memory store per test; nothing is shared between tests.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}

pub fn ann_body() -> Value {
    json!({"first_name": "Ann", "last_name": "Li", "age": 30, "email": "a@x.com", "role": "customer", "phone": "123"})
}

pub fn order_body(customer_id: Option<i32>, executor_id: Option<i32>) -> Value {
    json!({
        "name": "Покраска забора",
        "description": "Два слоя, белая краска",
        "start_date": "2024-05-01",
        "end_date": "2024-05-03",
        "address": "ул. Ленина, 1",
        "price": 1500,
        "customer_id": customer_id,
        "executor_id": executor_id
    })
}
