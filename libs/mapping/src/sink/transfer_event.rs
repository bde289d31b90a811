use eyre::{Result, eyre};
use store::transfer_event::{model::TransferEvent, store::Store};

use crate::sink::handle::Sink;

pub struct TransferEventSink {
    pub store: Store,
}

#[async_trait::async_trait]
impl Sink for TransferEventSink {
    type Item = TransferEvent;

    async fn save(&self, event: &TransferEvent) -> Result<()> {
        match self.store.insert_transfer_event(event).await {
            Ok(true) => {
                tracing::info!("Saved: {event:?}");
                Ok(())
            }
            Ok(false) => {
                tracing::debug!("Duplicate transfer event ignored: id={}", event.id);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Sink failed on [insert_transfer_event]: {e:?}");
                Err(eyre!(e))
            }
        }
    }
}
