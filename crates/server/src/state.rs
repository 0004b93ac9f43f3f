use sea_orm::DatabaseConnection;

/// Shared handler state. The connection pool is internally reference counted.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
