use serde::{Deserialize, Serialize};

/// Name carried by every [`ProspectCreatedEvent`].
pub const PROSPECT_CREATED: &str = "prospectCreated";

/// The `ProspectCreatedEvent` struct records the creation of a new prospect.
///
/// Events are built by the [`Prospect`](crate::Prospect) aggregate, which
/// generates both the event `id` and the `prospect_id`. The event `id` is the
/// uniqueness key used when the event is appended to the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectCreatedEvent {
    /// The ID of the event.
    pub id: String,

    /// The ID of the prospect created by this event.
    #[serde(rename = "prospectID")]
    pub prospect_id: String,

    pub first_name: String,

    pub last_name: String,

    pub phone_number: Option<String>,

    /// The type of event, always [`PROSPECT_CREATED`].
    pub event_name: String,

    /// The correlation ID of the command that produced the event, if any.
    #[serde(rename = "commandID")]
    pub command_id: Option<String>,

    /// The version of the event.
    pub version: u64,
}
