use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects::ObjectStore;

/// Load a JSON object from the store.
pub async fn load_state<T: DeserializeOwned>(
    store: &ObjectStore,
    key: &str,
) -> Result<T, StorageError> {
    let output = store.get_object(key).await?;
    let value: T = serde_json::from_slice(&output.body)?;
    Ok(value)
}

/// Save a value to the store as pretty-printed JSON.
pub async fn save_state<T: Serialize>(
    store: &ObjectStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.put_object(key, body).await
}
