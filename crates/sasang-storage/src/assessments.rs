//! Typed persistence for [`AssessmentRecord`]s.

use uuid::Uuid;

use sasang_core::keys;
use sasang_core::models::assessment::AssessmentRecord;

use crate::error::StorageError;
use crate::objects::ObjectStore;
use crate::state::{load_state, save_state};

/// Store a record under its canonical key. The record's `storage_key` is
/// rewritten to match.
pub async fn save_assessment(
    store: &ObjectStore,
    record: &mut AssessmentRecord,
) -> Result<(), StorageError> {
    record.storage_key = keys::assessment(record.id);
    save_state(store, &record.storage_key, &*record).await?;
    tracing::info!(assessment_id = %record.id, "assessment saved");
    Ok(())
}

pub async fn load_assessment(
    store: &ObjectStore,
    id: Uuid,
) -> Result<AssessmentRecord, StorageError> {
    load_state(store, &keys::assessment(id)).await
}

/// All saved records, oldest first.
pub async fn list_assessments(store: &ObjectStore) -> Result<Vec<AssessmentRecord>, StorageError> {
    let object_keys = store.list_objects(keys::ASSESSMENTS_PREFIX).await?;

    let mut records = Vec::with_capacity(object_keys.len());
    for key in &object_keys {
        if keys::assessment_id(key).is_none() {
            tracing::warn!(key, "skipping unrecognized object under assessments prefix");
            continue;
        }
        records.push(load_state::<AssessmentRecord>(store, key).await?);
    }
    records.sort_by_key(|r| r.created_at);
    Ok(records)
}

pub async fn delete_assessment(store: &ObjectStore, id: Uuid) -> Result<(), StorageError> {
    store.delete_object(&keys::assessment(id)).await?;
    tracing::info!(assessment_id = %id, "assessment deleted");
    Ok(())
}
