use eyre::{Result, eyre};
use store::message::{model::TransferMessage, store::Store};

use crate::sink::handle::Sink;

pub struct TransferMessageSink {
    pub store: Store,
}

#[async_trait::async_trait]
impl Sink for TransferMessageSink {
    type Item = TransferMessage;

    async fn save(&self, message: &TransferMessage) -> Result<()> {
        match self.store.insert_transfer_message(message).await {
            Ok(true) => {
                tracing::info!("Saved: {message:?}");
                Ok(())
            }
            Ok(false) => {
                tracing::debug!("Duplicate transfer message ignored: id={}", message.id);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Sink failed on [insert_transfer_message]: {e:?}");
                Err(eyre!(e))
            }
        }
    }
}
