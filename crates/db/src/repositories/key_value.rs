use crate::models::DbKeyValue;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_value(pool: &Pool<Postgres>, key: &str) -> Result<Option<DbKeyValue>> {
    tracing::debug!("Loading key: {}", key);

    let entry = sqlx::query_as::<_, DbKeyValue>(
        r#"
        SELECT namespace_key, value, updated_at
        FROM key_value_store
        WHERE namespace_key = $1
        "#,
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;

    Ok(entry)
}

pub async fn put_value(pool: &Pool<Postgres>, key: &str, value: &str) -> Result<DbKeyValue> {
    let now = Utc::now();

    let entry = sqlx::query_as::<_, DbKeyValue>(
        r#"
        INSERT INTO key_value_store (namespace_key, value, updated_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (namespace_key)
        DO UPDATE SET value = $2, updated_at = $3
        RETURNING namespace_key, value, updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Stored {} bytes under key: {}", value.len(), key);
    Ok(entry)
}

pub async fn delete_value(pool: &Pool<Postgres>, key: &str) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM key_value_store
        WHERE namespace_key = $1
        "#,
    )
    .bind(key)
    .execute(pool)
    .await?;

    Ok(())
}
