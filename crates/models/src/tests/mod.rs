
/// CRUD operations tests for all models
pub mod crud_tests;


use crate::{offer::OfferFields, order::OrderFields, user::UserFields};

pub(crate) fn ann() -> UserFields {
    UserFields {
        first_name: "Ann".into(),
        last_name: "Li".into(),
        age: 30,
        email: "a@x.com".into(),
        role: "customer".into(),
        phone: "123".into(),
    }
}

pub(crate) fn order_for(customer_id: Option<i32>, executor_id: Option<i32>) -> OrderFields {
    OrderFields {
        name: "Paint the fence".into(),
        description: "Two coats, white".into(),
        start_date: "2024-05-01".into(),
        end_date: "2024-05-03".into(),
        address: "1 Main St".into(),
        price: 1500,
        customer_id,
        executor_id,
    }
}

pub(crate) fn offer_for(order_id: Option<i32>, executor_id: Option<i32>) -> OfferFields {
    OfferFields { order_id, executor_id }
}
