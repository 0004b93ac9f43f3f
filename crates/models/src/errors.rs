use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("{field} {id} does not reference an existing {entity}")]
    DanglingReference { field: &'static str, id: i32, entity: &'static str },
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn db(e: DbErr) -> Self { Self::Db(e.to_string()) }

    pub fn not_found(entity: &'static str, id: i32) -> Self { Self::NotFound { entity, id } }
}
