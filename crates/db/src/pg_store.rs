use async_trait::async_trait;
use eyre::Result;
use studiobook_core::storage::KeyValueStore;

use crate::{repositories::key_value, DbPool};

/// Key-value store over the `key_value_store` table.
#[derive(Debug, Clone)]
pub struct PgKeyValueStore {
    pool: DbPool,
}

impl PgKeyValueStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for PgKeyValueStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        let entry = key_value::get_value(&self.pool, key).await?;
        Ok(entry.map(|e| e.value))
    }

    async fn save(&self, key: &str, value: &str) -> Result<()> {
        key_value::put_value(&self.pool, key, value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        key_value::delete_value(&self.pool, key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::create_test_pool;

    #[tokio::test]
    #[ignore = "requires a Postgres database at TEST_DATABASE_URL"]
    async fn round_trips_through_postgres() {
        let store = PgKeyValueStore::new(create_test_pool().await);
        let key = "pg-store-round-trip";

        store.remove(key).await.expect("clear key");
        assert_eq!(store.load(key).await.expect("load"), None);

        store.save(key, "[]").await.expect("save");
        store.save(key, r#"[{"studioId":1}]"#).await.expect("overwrite");
        assert_eq!(
            store.load(key).await.expect("load").as_deref(),
            Some(r#"[{"studioId":1}]"#)
        );

        store.remove(key).await.expect("remove");
        store.remove(key).await.expect("remove missing key");
        assert_eq!(store.load(key).await.expect("load"), None);
    }
}
