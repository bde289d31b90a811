use crate::message::model::{TransferMessage, message_id};
use eyre::{Result, WrapErr};
use host::{CosmosMessage, MsgSend};

impl TryFrom<&CosmosMessage> for TransferMessage {
    type Error = eyre::Report;

    fn try_from(msg: &CosmosMessage) -> Result<Self> {
        let send = MsgSend::try_from(msg)
            .wrap_err_with(|| format!("tx {} message {}", msg.tx.hash, msg.idx))?;

        Ok(Self {
            id: message_id(&msg.tx.hash, msg.idx),
            block_height: msg.block.height(),
            tx_hash: msg.tx.hash.clone(),
            from: send.from_address,
            to: send.to_address,
            amount: serde_json::to_string(&send.amount)?,
        })
    }
}
