//! Integration tests for the infrastructure components
//!
//! These tests verify that the PostgreSQL database is reachable and that the
//! shared pool helpers work against it. They need a running database named by
//! `DATABASE_URL`.

use common::database::{DatabaseConfig, health_check, init_pool};
use sqlx::Row;

#[tokio::test]
#[ignore = "requires a PostgreSQL instance at DATABASE_URL"]
async fn test_infrastructure_integration() -> Result<(), Box<dyn std::error::Error>> {
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    assert!(health_check(&pool).await?, "Database health check failed");

    let row = sqlx::query("SELECT 1 as result").fetch_one(&pool).await?;

    let result: i32 = row.get("result");
    assert_eq!(result, 1, "PostgreSQL simple query test failed");

    pool.close().await;
    Ok(())
}
