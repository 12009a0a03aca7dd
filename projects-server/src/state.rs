use sqlx::SqlitePool;

/// Shared application state. The pool is constructed once at startup and
/// passed down explicitly, so tests can swap in an in-memory database.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
