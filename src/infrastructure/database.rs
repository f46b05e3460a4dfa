use sqlx::{PgPool, postgres::PgPoolOptions};

/// Open the connection pool. The schema is assumed pre-created; there is no
/// migration step.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(16)
        .connect(database_url)
        .await
}
