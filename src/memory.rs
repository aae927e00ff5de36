use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::Value;

use crate::{EventTable, Item, PutError, event_store::EVENT_ID};

#[derive(Debug, Default)]
struct Tables {
    // table name -> key value -> item
    items: HashMap<String, HashMap<String, Item>>,
    attempts: usize,
}

/// An in-process [`EventTable`].
///
/// Tables must be created with [`with_table`](InMemoryEventTable::with_table)
/// before they can be written to. Clones share the same state, and every
/// write attempt is counted, which makes the table handy as a test double.
#[derive(Clone, Debug, Default)]
pub struct InMemoryEventTable {
    inner: Arc<Mutex<Tables>>,
}

impl InMemoryEventTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(self, table: impl Into<String>) -> Self {
        self.lock().items.entry(table.into()).or_default();
        self
    }

    /// Stores a bare item under `event_id`, so that later writes of that ID collide.
    pub fn occupy(&self, table: &str, event_id: &str) {
        let mut item = Item::new();
        item.insert(EVENT_ID.to_string(), Value::String(event_id.to_string()));
        self.lock()
            .items
            .entry(table.to_string())
            .or_default()
            .insert(event_id.to_string(), item);
    }

    /// Number of `put_if_absent` calls so far, successful or not.
    pub fn attempts(&self) -> usize {
        self.lock().attempts
    }

    pub fn items(&self, table: &str) -> Vec<Item> {
        self.lock()
            .items
            .get(table)
            .map(|items| items.values().cloned().collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        // A panic while holding the lock cannot leave a table half-written.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl EventTable for InMemoryEventTable {
    async fn put_if_absent(
        &self,
        table: &str,
        key_attribute: &str,
        item: Item,
    ) -> Result<(), PutError> {
        let mut tables = self.lock();
        tables.attempts += 1;

        let key = match item.get(key_attribute) {
            Some(Value::String(key)) => key.clone(),
            _ => return Err(anyhow!("item has no string attribute `{key_attribute}`").into()),
        };

        let items = tables.items.get_mut(table).ok_or(PutError::TableNotFound)?;
        if items.contains_key(&key) {
            return Err(PutError::ConditionFailed);
        }
        items.insert(key, item);

        Ok(())
    }
}
