use dynamodb_json::{AttributeValueDecoder, Item, NativeValue, NumericNormalizer};
use tracing::{debug, Span};

use crate::client::ItemStore;
use crate::error::StoreError;
use crate::options::RetrieveOptions;

/// Batch writes and reads against one client, with decoding on the way in
/// and decimal normalization on the way out.
///
/// The client handle and the logging span are fixed at construction and live
/// as long as the component.
#[derive(Debug)]
pub struct DocumentStore<C> {
    client: C,
    span: Span,
    decoder: AttributeValueDecoder,
    normalizer: NumericNormalizer,
}

impl<C: ItemStore> DocumentStore<C> {
    pub fn new(client: C, span: Span) -> Self {
        Self {
            client,
            span,
            decoder: AttributeValueDecoder::new(),
            normalizer: NumericNormalizer::new(),
        }
    }

    /// Logs under whatever span is current at construction.
    pub fn with_client(client: C) -> Self {
        Self::new(client, Span::current())
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Save a batch of items into `table` in one batched write.
    pub fn save_many(&self, batch: Vec<Item>, table: &str) -> Result<(), StoreError> {
        let _entered = self.span.enter();
        debug!(table, items = batch.len(), "saving batch");
        self.client.put_items(table, batch)
    }

    /// Read up to `options.max_batch_size` items from `table`.
    ///
    /// Unless `options.use_decimal` is set, decimal numbers are replaced by
    /// integers or floats.
    pub fn retrieve_many(
        &self,
        table: &str,
        options: &RetrieveOptions,
    ) -> Result<Vec<Item>, StoreError> {
        let _entered = self.span.enter();
        let mut batch = self.client.scan(table, options.max_batch_size)?;
        debug!(
            table,
            items = batch.len(),
            limit = options.max_batch_size,
            use_decimal = options.use_decimal,
            "retrieved batch"
        );
        if !options.use_decimal {
            self.normalizer.normalize_items(&mut batch);
        }
        Ok(batch)
    }

    /// Decode one attribute-value JSON object.
    pub fn load_object(&self, object: serde_json::Value) -> NativeValue {
        self.decoder.decode(object)
    }

    /// Parse and decode attribute-value JSON text.
    pub fn load_object_str(&self, text: &str) -> Result<NativeValue, StoreError> {
        Ok(self.decoder.decode_str(text)?)
    }
}
