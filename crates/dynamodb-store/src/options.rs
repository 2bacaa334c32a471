//! Read options for [`DocumentStore::retrieve_many`](crate::DocumentStore::retrieve_many).

use serde::{Deserialize, Serialize};

/// Scan size used when none is configured.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100;

/// How a batch is read back from a table.
///
/// Deserializable with per-field defaults, so it can sit inside a larger
/// configuration file:
///
/// ```
/// use dynamodb_store::RetrieveOptions;
///
/// let opts: RetrieveOptions = serde_json::from_str(r#"{"use_decimal": true}"#).unwrap();
/// assert_eq!(opts.max_batch_size, 100);
/// assert!(opts.use_decimal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrieveOptions {
    /// Upper bound on the number of items a single scan returns.
    pub max_batch_size: usize,
    /// Keep `Decimal` leaves as returned by the client instead of
    /// normalizing them to integers and floats.
    pub use_decimal: bool,
}

impl Default for RetrieveOptions {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            use_decimal: false,
        }
    }
}

impl RetrieveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size;
        self
    }

    pub fn with_use_decimal(mut self, use_decimal: bool) -> Self {
        self.use_decimal = use_decimal;
        self
    }
}
