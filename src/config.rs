use serde::{Deserialize, Serialize};

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Settings for a [`ProspectEventWriter`](crate::ProspectEventWriter).
///
/// `page_size` is not used by any write operation; it is kept for readers of
/// the event table that page through historical events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStoreConfig {
    pub table_name: String,

    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl EventStoreConfig {
    pub fn new(table_name: impl Into<String>, page_size: u32) -> Self {
        Self {
            table_name: table_name.into(),
            page_size,
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_defaults_when_absent() {
        let config: EventStoreConfig =
            serde_json::from_str(r#"{"table_name":"prospect_events"}"#).unwrap();

        assert_eq!(config, EventStoreConfig::new("prospect_events", 10));
    }
}
