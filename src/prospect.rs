use serde::{Deserialize, Serialize};

use crate::{
    Aggregate, Command, ProspectCreatedEvent, ProspectError, Result, Uuid, event::PROSPECT_CREATED,
};

/// Request to create a new prospect.
///
/// Both names are required by [`Prospect::validate`]; the phone number is
/// optional and never checked.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProspectRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl CreateProspectRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            phone_number,
        }
    }
}

/// The prospect aggregate.
#[derive(Clone, Debug, Default)]
pub struct Prospect;

impl Prospect {
    /// Like [`Aggregate::validate`], but names the first field that is missing.
    pub fn validate_request(&self, request: &CreateProspectRequest) -> Result<()> {
        if is_blank(request.first_name.as_deref()) {
            return Err(ProspectError::Validation { field: "firstName" });
        }
        if is_blank(request.last_name.as_deref()) {
            return Err(ProspectError::Validation { field: "lastName" });
        }
        Ok(())
    }

    /// Builds the creation event, correlated with the command that issued it.
    pub fn generate_created_event_for(
        &self,
        request: CreateProspectRequest,
        command: &Command,
    ) -> ProspectCreatedEvent {
        ProspectCreatedEvent {
            command_id: Some(command.command_id.clone()),
            ..self.generate_created_event(request)
        }
    }
}

impl Aggregate for Prospect {
    type Request = CreateProspectRequest;
    type CreatedEvent = ProspectCreatedEvent;

    fn validate(&self, request: &CreateProspectRequest) -> bool {
        self.validate_request(request).is_ok()
    }

    fn generate_created_event(&self, request: CreateProspectRequest) -> ProspectCreatedEvent {
        ProspectCreatedEvent {
            id: Uuid::new_v4().to_string(),
            prospect_id: Uuid::new_v4().to_string(),
            first_name: request.first_name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
            phone_number: request.phone_number,
            event_name: PROSPECT_CREATED.to_string(),
            command_id: None,
            version: 1,
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.chars().all(is_blank_char))
}

// Whitespace, except the no-break spaces, plus the ASCII separator controls.
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        '\u{001C}'..='\u{001F}' => true,
        c => c.is_whitespace(),
    }
}
