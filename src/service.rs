use tracing::{info, warn};

use crate::{
    Aggregate, Command, CreateProspectRequest, EventTable, Prospect, ProspectCreatedEvent,
    ProspectEventWriter, Result,
};

/// Creates prospects: validates the request, builds the creation event and
/// appends it to the event store.
///
/// All collaborators are passed in at construction, so a service can be
/// built per process, per test or per request.
#[derive(Clone, Debug)]
pub struct ProspectService<T: EventTable> {
    prospect: Prospect,
    writer: ProspectEventWriter<T>,
}

impl<T: EventTable> ProspectService<T> {
    pub fn new(writer: ProspectEventWriter<T>) -> Self {
        Self {
            prospect: Prospect,
            writer,
        }
    }

    pub fn writer(&self) -> &ProspectEventWriter<T> {
        &self.writer
    }

    /// Returns the stored event. An invalid request never reaches the store.
    pub async fn create_prospect(
        &self,
        request: CreateProspectRequest,
        command: Option<&Command>,
    ) -> Result<ProspectCreatedEvent> {
        if let Err(err) = self.prospect.validate_request(&request) {
            warn!(error = %err, "rejected prospect request");
            return Err(err);
        }

        let event = match command {
            Some(command) => self.prospect.generate_created_event_for(request, command),
            None => self.prospect.generate_created_event(request),
        };

        self.writer.append(&event).await?;
        info!(prospect_id = %event.prospect_id, "prospect created");

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventStoreConfig, InMemoryEventTable, ProspectError};

    const TABLE: &str = "prospect_events";

    fn service(table: &InMemoryEventTable) -> ProspectService<InMemoryEventTable> {
        ProspectService::new(ProspectEventWriter::new(
            table.clone(),
            EventStoreConfig::new(TABLE, 10),
        ))
    }

    #[tokio::test]
    async fn creates_and_stores_a_valid_prospect() {
        let table = InMemoryEventTable::new().with_table(TABLE);
        let request = CreateProspectRequest::new("Ada", "Lovelace", Some(String::new()));

        let event = service(&table).create_prospect(request, None).await.unwrap();

        assert_eq!(event.event_name, "prospectCreated");
        assert_eq!(event.version, 1);
        assert!(!event.id.is_empty());
        assert!(!event.prospect_id.is_empty());
        assert_eq!(table.items(TABLE)[0]["eventID"], event.id);
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_the_store() {
        let table = InMemoryEventTable::new().with_table(TABLE);
        let request = CreateProspectRequest {
            first_name: Some(String::new()),
            last_name: Some("Lovelace".to_string()),
            phone_number: None,
        };

        let err = service(&table).create_prospect(request, None).await.unwrap_err();

        assert!(matches!(err, ProspectError::Validation { field: "firstName" }));
        assert!(err.is_client_error());
        assert_eq!(table.attempts(), 0);
    }

    #[tokio::test]
    async fn command_id_is_carried_on_the_event() {
        let table = InMemoryEventTable::new().with_table(TABLE);
        let command = Command::new(Some("user-1".to_string()));

        let event = service(&table)
            .create_prospect(CreateProspectRequest::new("Ada", "Lovelace", None), Some(&command))
            .await
            .unwrap();

        assert_eq!(event.command_id, Some(command.command_id));
    }

    #[tokio::test]
    async fn store_failures_are_internal_errors() {
        let table = InMemoryEventTable::new();

        let err = service(&table)
            .create_prospect(CreateProspectRequest::new("Ada", "Lovelace", None), None)
            .await
            .unwrap_err();

        assert!(matches!(err, ProspectError::TableDoesNotExist { .. }));
        assert!(!err.is_client_error());
    }
}
