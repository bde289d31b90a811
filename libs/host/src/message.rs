use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::block::CosmosBlock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmosTransaction {
    pub hash: String,
}

/// Message payload as decoded by the host. The decoded body stays untyped
/// until a handler asks for a concrete shape (see [`crate::MsgSend`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedMessage {
    pub type_url: String,
    pub decoded_msg: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmosMessage {
    /// Position of the message within its transaction.
    pub idx: u32,
    pub block: CosmosBlock,
    pub tx: CosmosTransaction,
    pub msg: DecodedMessage,
}

impl CosmosMessage {
    pub fn type_url(&self) -> &str {
        &self.msg.type_url
    }
}
