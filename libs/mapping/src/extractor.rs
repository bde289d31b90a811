use crate::sink::handle::Sink;
use crate::sink::{message::TransferMessageSink, transfer_event::TransferEventSink};
use eyre::Result;
use host::{CosmosBlock, CosmosEvent, CosmosMessage};
use std::sync::Arc;
use store::client::Client;
use store::message::model::TransferMessage;
use store::transfer_event::model::TransferEvent;

/// Builds a [`TransferMessage`] from a decoded bank send.
///
/// Fails when the host could not decode every field of the payload.
pub fn build_transfer_message(msg: &CosmosMessage) -> Result<TransferMessage> {
    msg.try_into()
}

/// Builds a [`TransferEvent`] from a `transfer` event's attributes.
pub fn build_transfer_event(event: &CosmosEvent) -> TransferEvent {
    event.into()
}

/// Handlers invoked by the indexing host, one call per chain primitive.
pub struct EventExtractor {
    message_sink: Arc<dyn Sink<Item = TransferMessage>>,
    event_sink: Arc<dyn Sink<Item = TransferEvent>>,
}

impl EventExtractor {
    pub fn new(
        message_sink: Arc<dyn Sink<Item = TransferMessage>>,
        event_sink: Arc<dyn Sink<Item = TransferEvent>>,
    ) -> Self {
        Self { message_sink, event_sink }
    }

    /// Extractor persisting both record kinds through the SQLite stores.
    pub fn with_store(client: &Client) -> Self {
        let message_store = store::message::store::Store::new(client.clone());
        let event_store = store::transfer_event::store::Store::new(client.clone());
        Self::new(
            Arc::new(TransferMessageSink { store: message_store }),
            Arc::new(TransferEventSink { store: event_store }),
        )
    }

    pub fn on_block(&self, block: &CosmosBlock) {
        tracing::info!("----- [Block Handled] => {}", block.height());
    }

    pub async fn on_message(&self, msg: &CosmosMessage) -> Result<()> {
        let record = build_transfer_message(msg)?;
        self.message_sink.save(&record).await
    }

    pub async fn on_event(&self, event: &CosmosEvent) -> Result<()> {
        let record = build_transfer_event(event);
        self.event_sink.save(&record).await
    }
}
