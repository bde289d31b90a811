use crate::extractor::EventExtractor;
use crate::filter::HandlerFilter;
use eyre::Result;
use host::{CosmosBlock, CosmosEvent, CosmosMessage};
use serde::Deserialize;

/// One host-decoded chain primitive, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    Block(CosmosBlock),
    Message(CosmosMessage),
    Event(CosmosEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    Skipped,
}

impl EventExtractor {
    /// Routes a primitive to its handler, skipping ones the filter rejects.
    pub async fn handle(&self, primitive: &Primitive, filter: &HandlerFilter) -> Result<Outcome> {
        match primitive {
            Primitive::Block(block) => {
                self.on_block(block);
                Ok(Outcome::Handled)
            }
            Primitive::Message(msg) if filter.matches_message(msg) => {
                self.on_message(msg).await?;
                Ok(Outcome::Handled)
            }
            Primitive::Event(event) if filter.matches_event(event) => {
                self.on_event(event).await?;
                Ok(Outcome::Handled)
            }
            Primitive::Message(msg) => {
                tracing::debug!("Skip: message type {} not subscribed", msg.type_url());
                Ok(Outcome::Skipped)
            }
            Primitive::Event(event) => {
                tracing::debug!("Skip: event type {} not subscribed", event.kind());
                Ok(Outcome::Skipped)
            }
        }
    }
}
