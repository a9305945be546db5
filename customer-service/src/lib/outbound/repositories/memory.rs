use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::security::errors::TokenStoreError;
use crate::domain::security::models::TokenRecord;
use crate::domain::security::ports::TokenStore;

/// Process-local token store.
///
/// Records are inserted whole under the write lock, so readers never see a
/// partial record. Tokens do not survive a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    records: Arc<RwLock<HashMap<String, TokenRecord>>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn put(&self, record: &TokenRecord) -> Result<(), TokenStoreError> {
        match self
            .records
            .write()
            .await
            .entry(record.token.as_str().to_string())
        {
            Entry::Occupied(_) => Err(TokenStoreError::Conflict),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(())
            }
        }
    }

    async fn get(&self, token: &str) -> Result<Option<TokenRecord>, TokenStoreError> {
        Ok(self.records.read().await.get(token).cloned())
    }
}
