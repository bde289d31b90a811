use eyre::Result;
use sqlx::{Error, SqlitePool, sqlite::SqlitePoolOptions};

#[derive(Clone)]
pub struct Client {
    pool: SqlitePool,
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

// Every connection to `sqlite::memory:` opens its own database, and the database
// is dropped with its connection. In-memory pools keep exactly one connection alive.
fn pool_options(database_url: &str) -> SqlitePoolOptions {
    if is_memory_url(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    }
}

/// SQLite integers are signed; heights above `i64::MAX` are rejected instead of wrapped.
pub fn encode_block_height(block_height: u64) -> Result<i64, Error> {
    i64::try_from(block_height).map_err(|e| {
        Error::Encode(format!("block_height {block_height} out of range: {e}").into())
    })
}

impl Client {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = pool_options(database_url).connect(database_url).await?;

        Ok(Self { pool })
    }

    pub async fn init(database_url: &str) -> Result<Self> {
        let client = Client::new(database_url).await?;

        // Create tables on startup
        sqlx::raw_sql(include_str!("../resources/create_tables.sql"))
            .execute(client.pool())
            .await?;

        Ok(client)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
