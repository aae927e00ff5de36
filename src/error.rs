use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProspectError {
    #[error("Require {field} to create a prospect")]
    Validation { field: &'static str },

    #[error("Unable to generate unique event id after {attempts} tries")]
    CouldNotCreateEvent { attempts: u32 },

    #[error("Event table {table} does not exist")]
    TableDoesNotExist { table: String },

    #[error("Event store operation failed: {0}")]
    Store(#[source] anyhow::Error),

    #[error("Failed to (de)serialize event: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProspectError {
    /// Whether the failure was caused by the caller's input rather than by the
    /// store. Transport layers map this to a "bad request" style response.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ProspectError::Validation { .. })
    }
}

/// Outcome of a single conditional write against an [`EventTable`](crate::EventTable).
#[derive(Error, Debug)]
pub enum PutError {
    #[error("conditional check failed: key already exists")]
    ConditionFailed,

    #[error("table not found")]
    TableNotFound,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Result alias within the library
pub type Result<T, E = ProspectError> = std::result::Result<T, E>;
