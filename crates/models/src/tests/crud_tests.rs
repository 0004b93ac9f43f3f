use anyhow::Result;

use crate::db::connect_in_memory;
use crate::errors::ModelError;
use crate::{offer, order, user};
use super::{ann, offer_for, order_for};

#[tokio::test]
async fn test_user_crud() -> Result<()> {
    let db = connect_in_memory().await?;

    let created = user::insert(&db, ann()).await?;
    assert_eq!(created.id, 1);
    assert_eq!(user::UserFields::from(created.clone()), ann());

    let found = user::find(&db, created.id).await?;
    assert_eq!(found, created);

    let mut changed = ann();
    changed.first_name = "Анна".into();
    changed.age = 31;
    let replaced = user::replace(&db, created.id, changed.clone()).await?;
    assert_eq!(replaced.id, created.id);
    assert_eq!(user::UserFields::from(user::find(&db, created.id).await?), changed);

    user::delete(&db, created.id).await?;
    assert!(matches!(user::find(&db, created.id).await, Err(ModelError::NotFound { entity: "user", id: 1 })));
    Ok(())
}

#[tokio::test]
async fn test_missing_ids_are_not_found() -> Result<()> {
    let db = connect_in_memory().await?;

    assert!(matches!(order::find(&db, 42).await, Err(ModelError::NotFound { .. })));
    assert!(matches!(order::replace(&db, 42, order_for(None, None)).await, Err(ModelError::NotFound { .. })));
    assert!(matches!(order::delete(&db, 42).await, Err(ModelError::NotFound { .. })));
    assert!(matches!(offer::delete(&db, 5).await, Err(ModelError::NotFound { entity: "offer", id: 5 })));
    assert!(matches!(user::replace(&db, 7, ann()).await, Err(ModelError::NotFound { .. })));
    Ok(())
}

#[tokio::test]
async fn test_list_in_insertion_order() -> Result<()> {
    let db = connect_in_memory().await?;

    let mut ids = vec![];
    for i in 0..5 {
        let mut f = ann();
        f.first_name = format!("user{i}");
        ids.push(user::insert(&db, f).await?.id);
    }
    user::delete(&db, ids[1]).await?;
    user::delete(&db, ids[3]).await?;

    let names: Vec<String> = user::list_all(&db).await?.into_iter().map(|u| u.first_name).collect();
    assert_eq!(names, vec!["user0", "user2", "user4"]);
    Ok(())
}

#[tokio::test]
async fn test_ids_are_not_reused() -> Result<()> {
    let db = connect_in_memory().await?;

    let first = user::insert(&db, ann()).await?;
    let second = user::insert(&db, ann()).await?;
    user::delete(&db, second.id).await?;
    let third = user::insert(&db, ann()).await?;
    assert!(third.id > second.id);
    assert!(second.id > first.id);
    Ok(())
}

#[tokio::test]
async fn test_insert_with_explicit_id() -> Result<()> {
    let db = connect_in_memory().await?;

    let seeded = user::insert_with_id(&db, 10, ann()).await?;
    assert_eq!(seeded.id, 10);
    let next = user::insert(&db, ann()).await?;
    assert_eq!(next.id, 11);
    Ok(())
}

#[tokio::test]
async fn test_order_length_bounds() -> Result<()> {
    let db = connect_in_memory().await?;

    let mut long_description = order_for(None, None);
    long_description.description = "x".repeat(order::DESCRIPTION_MAX_CHARS + 1);
    assert!(matches!(order::insert(&db, long_description).await, Err(ModelError::Validation(_))));

    let mut long_address = order_for(None, None);
    long_address.address = "ё".repeat(order::ADDRESS_MAX_CHARS + 1);
    assert!(matches!(order::insert(&db, long_address).await, Err(ModelError::Validation(_))));

    // bounds count characters, not bytes
    let mut cyrillic = order_for(None, None);
    cyrillic.address = "ё".repeat(order::ADDRESS_MAX_CHARS);
    let created = order::insert(&db, cyrillic).await?;
    assert_eq!(created.address.chars().count(), order::ADDRESS_MAX_CHARS);

    assert!(order::list_all(&db).await?.len() == 1);
    Ok(())
}

#[tokio::test]
async fn test_offer_crud() -> Result<()> {
    let db = connect_in_memory().await?;

    let u = user::insert(&db, ann()).await?;
    let o = order::insert(&db, order_for(Some(u.id), None)).await?;
    let created = offer::insert(&db, offer_for(Some(o.id), Some(u.id))).await?;
    assert_eq!(offer::find(&db, created.id).await?, created);

    let replaced = offer::replace(&db, created.id, offer_for(None, None)).await?;
    assert_eq!(replaced.order_id, None);
    assert_eq!(replaced.executor_id, None);

    offer::delete(&db, created.id).await?;
    assert!(offer::list_all(&db).await?.is_empty());
    Ok(())
}
