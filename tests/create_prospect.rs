use std::sync::Arc;

use prospect_events::{
    Aggregate, Command, CreateProspectRequest, EventStoreConfig, InMemoryEventTable, Prospect,
    ProspectError, ProspectEventWriter, ProspectService,
};

const TABLE: &str = "prospect_events";

fn service(table: &InMemoryEventTable) -> ProspectService<InMemoryEventTable> {
    ProspectService::new(ProspectEventWriter::new(
        table.clone(),
        EventStoreConfig::new(TABLE, 10),
    ))
}

#[tokio::test]
async fn ada_lovelace_is_recorded() {
    let table = InMemoryEventTable::new().with_table(TABLE);
    let request = CreateProspectRequest::new("Ada", "Lovelace", Some(String::new()));
    assert!(Prospect.validate(&request));

    let event = service(&table).create_prospect(request, None).await.unwrap();

    assert_eq!(event.event_name, "prospectCreated");
    assert_eq!(event.version, 1);
    assert!(!event.id.is_empty());
    assert!(!event.prospect_id.is_empty());

    let items = table.items(TABLE);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["eventID"], event.id);
    assert_eq!(items[0]["prospectID"], event.prospect_id);
    assert_eq!(table.attempts(), 1);
}

#[tokio::test]
async fn blank_first_name_never_reaches_the_store() {
    let table = InMemoryEventTable::new().with_table(TABLE);
    let request = CreateProspectRequest {
        first_name: Some(String::new()),
        last_name: Some("Lovelace".to_string()),
        phone_number: None,
    };
    assert!(!Prospect.validate(&request));

    let err = service(&table).create_prospect(request, None).await.unwrap_err();

    assert!(matches!(err, ProspectError::Validation { .. }));
    assert_eq!(table.attempts(), 0);
    assert!(table.items(TABLE).is_empty());
}

#[tokio::test]
async fn requests_deserialized_from_json_are_validated() {
    let table = InMemoryEventTable::new().with_table(TABLE);
    let body = r#"{"firstName":"Grace","lastName":"Hopper","phoneNumber":"555-0100"}"#;
    let request: CreateProspectRequest = serde_json::from_str(body).unwrap();
    let command = Command::new(Some("user-7".to_string()));

    let event = service(&table)
        .create_prospect(request, Some(&command))
        .await
        .unwrap();

    assert_eq!(event.first_name, "Grace");
    assert_eq!(event.phone_number.as_deref(), Some("555-0100"));
    assert_eq!(event.command_id.as_deref(), Some(command.command_id.as_str()));
}

#[tokio::test]
async fn concurrent_appends_share_one_writer() {
    let table = InMemoryEventTable::new().with_table(TABLE);
    let service = Arc::new(service(&table));

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .create_prospect(
                        CreateProspectRequest::new(format!("First{i}"), "Last", None),
                        None,
                    )
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(table.items(TABLE).len(), 32);
    assert_eq!(table.attempts(), 32);
}
