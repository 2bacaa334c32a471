use thiserror::Error;

/// Errors surfaced by the store component.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("table not found: {0}")]
    TableNotFound(String),

    #[error("store client failed on table {table}: {message}")]
    Client { table: String, message: String },

    #[error(transparent)]
    Decode(#[from] dynamodb_json::Error),
}

impl StoreError {
    pub fn client(table: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Client {
            table: table.into(),
            message: message.into(),
        }
    }
}
