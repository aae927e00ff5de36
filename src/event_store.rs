use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use crate::{EventStoreConfig, ProspectCreatedEvent, ProspectError, PutError, Result};

/// A stored item: attribute name to attribute value.
pub type Item = Map<String, Value>;

/// Attribute holding the event ID; the uniqueness key of the event table.
pub const EVENT_ID: &str = "eventID";

/// Total number of conditional writes attempted before `append` gives up.
pub const MAX_ATTEMPTS: u32 = 10;

/// The `EventTable` trait defines the storage an event writer appends to.
///
/// Implementations only need an atomic "insert if absent" write: the item is
/// stored only if no item in `table` has the same value for `key_attribute`.
/// A failed condition must be reported as [`PutError::ConditionFailed`] and an
/// unknown table as [`PutError::TableNotFound`], so that callers can tell a
/// duplicate key from a misconfigured store.
#[async_trait]
pub trait EventTable: Send + Sync {
    async fn put_if_absent(
        &self,
        table: &str,
        key_attribute: &str,
        item: Item,
    ) -> Result<(), PutError>;
}

/// The persisted shape of a [`ProspectCreatedEvent`].
///
/// Only the event identity is stored. Names, phone number and command ID stay
/// on the in-memory event, and the stored version is always the creation
/// version, whatever the event carries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEventItem {
    #[serde(rename = "eventID")]
    pub event_id: String,

    pub version: u64,

    #[serde(rename = "prospectID")]
    pub prospect_id: String,

    #[serde(rename = "eventName")]
    pub event_name: String,
}

impl StoredEventItem {
    pub fn from_event(event: &ProspectCreatedEvent) -> Self {
        Self {
            event_id: event.id.clone(),
            version: 1,
            prospect_id: event.prospect_id.clone(),
            event_name: event.event_name.clone(),
        }
    }

    pub fn into_item(self) -> Result<Item> {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }
}

enum AppendState {
    Attempting(u32),
    Succeeded,
    Exhausted,
    TableMissing,
}

/// Appends [`ProspectCreatedEvent`]s to an [`EventTable`], at most once per event ID.
///
/// A write that hits an existing event ID is retried unchanged, up to
/// [`MAX_ATTEMPTS`] in total. The event ID is never regenerated, so a real
/// collision always ends in [`ProspectError::CouldNotCreateEvent`]; random v4
/// IDs make that case practically unreachable.
#[derive(Clone, Debug)]
pub struct ProspectEventWriter<T: EventTable> {
    table: T,
    config: EventStoreConfig,
}

impl<T: EventTable> ProspectEventWriter<T> {
    pub fn new(table: T, config: EventStoreConfig) -> Self {
        Self { table, config }
    }

    pub fn table_name(&self) -> &str {
        &self.config.table_name
    }

    /// Page size for reads of the event table. No write uses it.
    pub fn page_size(&self) -> u32 {
        self.config.page_size
    }

    /// Stores the event and returns its ID.
    pub async fn append(&self, event: &ProspectCreatedEvent) -> Result<String> {
        let item = StoredEventItem::from_event(event).into_item()?;
        let table = self.table_name();

        let mut state = AppendState::Attempting(1);
        loop {
            state = match state {
                AppendState::Attempting(attempt) => {
                    debug!(event_id = %event.id, table, attempt, "putting event");
                    match self.table.put_if_absent(table, EVENT_ID, item.clone()).await {
                        Ok(()) => AppendState::Succeeded,
                        Err(PutError::ConditionFailed) if attempt < MAX_ATTEMPTS => {
                            warn!(
                                event_id = %event.id,
                                table,
                                attempt,
                                "event id already stored, retrying"
                            );
                            AppendState::Attempting(attempt + 1)
                        }
                        Err(PutError::ConditionFailed) => AppendState::Exhausted,
                        Err(PutError::TableNotFound) => AppendState::TableMissing,
                        Err(PutError::Other(source)) => {
                            error!(
                                event_id = %event.id,
                                table,
                                error = %source,
                                "event store failure"
                            );
                            return Err(ProspectError::Store(source));
                        }
                    }
                }
                AppendState::Succeeded => {
                    info!(
                        event_id = %event.id,
                        prospect_id = %event.prospect_id,
                        table,
                        "event stored"
                    );
                    return Ok(event.id.clone());
                }
                AppendState::Exhausted => {
                    error!(
                        event_id = %event.id,
                        table,
                        attempts = MAX_ATTEMPTS,
                        "giving up on event id"
                    );
                    return Err(ProspectError::CouldNotCreateEvent {
                        attempts: MAX_ATTEMPTS,
                    });
                }
                AppendState::TableMissing => {
                    error!(table, "event table does not exist");
                    return Err(ProspectError::TableDoesNotExist {
                        table: table.to_string(),
                    });
                }
            };
        }
    }
}
