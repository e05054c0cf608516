#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh in-memory store per test, migrated and loaded with the demo data set.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    crate::seed::seed_demo_data(&db).await?;
    Ok(db)
}
