use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use std::time::Duration;

pub type DbPool = Pool<SqliteConnectionManager>;

/// How long startup waits for the store before giving up.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Open the exercise store described by `database_url`.
///
/// Accepts `sqlite:<path>[?query]`, a bare path, or `:memory:`. Building the
/// pool opens its connections eagerly, so an unreachable store fails here
/// rather than on the first request.
pub fn create_pool(database_url: &str) -> Result<DbPool, r2d2::Error> {
    let path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
    // Remove query parameters (e.g., ?mode=rwc)
    let path = path.split('?').next().unwrap_or(path);

    if path == ":memory:" {
        // Every in-memory connection is its own database, so keep exactly one.
        return create_memory_pool();
    }

    Pool::builder()
        .max_size(5)
        .connection_timeout(CONNECT_TIMEOUT)
        .build(SqliteConnectionManager::file(Path::new(path)))
}

pub fn create_memory_pool() -> Result<DbPool, r2d2::Error> {
    Pool::builder()
        .max_size(1)
        .build(SqliteConnectionManager::memory())
}
