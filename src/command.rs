use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Uuid;

/// The `Command` struct carries the correlation metadata of the request that
/// triggered an event.
///
/// A command is not persisted on its own. Its `command_id` travels inside the
/// events it produces, so that events emitted by the same request can be
/// correlated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// The correlation ID of the command.
    #[serde(rename = "commandID")]
    pub command_id: String,

    /// When the command was issued.
    #[serde(rename = "createDateTime")]
    pub created_at: DateTime<Utc>,

    /// The user who issued the command, if known.
    #[serde(rename = "userID")]
    pub user_id: Option<String>,
}

impl Command {
    /// Creates a new command with a random ID, stamped with the current time.
    pub fn new(user_id: Option<String>) -> Self {
        Self {
            command_id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_commands_get_distinct_ids() {
        let a = Command::new(None);
        let b = Command::new(Some("user-1".to_string()));

        assert_ne!(a.command_id, b.command_id);
        assert_eq!(b.user_id.as_deref(), Some("user-1"));
        assert!(a.created_at <= Utc::now());
    }

    #[test]
    fn serializes_with_wire_names() {
        let cmd = Command::new(Some("user-1".to_string()));
        let json = serde_json::to_value(&cmd).unwrap();

        assert_eq!(json["commandID"], cmd.command_id);
        assert_eq!(json["userID"], "user-1");
        assert!(json.get("createDateTime").is_some());
    }
}
