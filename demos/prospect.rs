/// # Prospect events example
///
/// Creates a prospect against an in-memory event table and shows how each
/// failure mode of the event writer surfaces.
///
/// ## Usage
///
/// ```sh
/// cargo run --example prospect
/// ```
use prospect_events::{
    Command, CreateProspectRequest, EventStoreConfig, InMemoryEventTable, ProspectEventWriter,
    ProspectService,
};

const TABLE: &str = "prospect_events";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let table = InMemoryEventTable::new().with_table(TABLE);
    let service = ProspectService::new(ProspectEventWriter::new(
        table.clone(),
        EventStoreConfig::new(TABLE, 10),
    ));

    let command = Command::new(Some("demo-user".to_string()));
    let event = service
        .create_prospect(
            CreateProspectRequest::new("Ada", "Lovelace", Some(String::new())),
            Some(&command),
        )
        .await?;
    println!("MAIN: created event: {}", serde_json::to_string_pretty(&event)?);

    let invalid = CreateProspectRequest {
        first_name: Some(String::new()),
        last_name: Some("Lovelace".to_string()),
        phone_number: None,
    };
    if let Err(err) = service.create_prospect(invalid, None).await {
        println!("MAIN: rejected (client error: {}): {err}", err.is_client_error());
    }

    // Re-appending the same event collides on every attempt.
    if let Err(err) = service.writer().append(&event).await {
        println!("MAIN: {err}");
    }

    let missing = ProspectEventWriter::new(table.clone(), EventStoreConfig::new("missing", 10));
    if let Err(err) = missing.append(&event).await {
        println!("MAIN: {err}");
    }

    println!(
        "MAIN: {} item(s) stored after {} attempt(s)",
        table.items(TABLE).len(),
        table.attempts()
    );

    Ok(())
}
