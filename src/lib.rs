//! # prospect_events
//!
//! Records the creation of prospects as events, exactly once per event ID.
//!
//! A [`Prospect`] aggregate validates a [`CreateProspectRequest`] and turns it
//! into a [`ProspectCreatedEvent`] with freshly generated IDs. A
//! [`ProspectEventWriter`] then appends the event to an [`EventTable`] with a
//! conditional "insert if absent" write on the event ID, retrying collisions a
//! bounded number of times. [`ProspectService`] wires the two together.
//!
//! ```rust
//! use prospect_events::{
//!     CreateProspectRequest, EventStoreConfig, InMemoryEventTable, ProspectEventWriter,
//!     ProspectService,
//! };
//!
//! # tokio_test_block(async {
//! let table = InMemoryEventTable::new().with_table("prospect_events");
//! let writer = ProspectEventWriter::new(table, EventStoreConfig::new("prospect_events", 10));
//! let service = ProspectService::new(writer);
//!
//! let event = service
//!     .create_prospect(CreateProspectRequest::new("Ada", "Lovelace", None), None)
//!     .await
//!     .unwrap();
//! assert_eq!(event.event_name, "prospectCreated");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
//! # }
//! ```

pub use uuid::Uuid;

mod aggregate;
pub use aggregate::*;

mod command;
pub use command::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod event;
pub use event::*;

mod event_store;
pub use event_store::*;

mod memory;
pub use memory::*;

mod prospect;
pub use prospect::*;

mod service;
pub use service::*;
