use serde::{Deserialize, Serialize};

use crate::block::CosmosBlock;
use crate::message::CosmosTransaction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Vec<EventAttribute>,
}

/// The message that emitted an event. Only its index is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMessage {
    pub idx: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmosEvent {
    /// Position of the event within the message's event log.
    pub idx: u32,
    pub block: CosmosBlock,
    pub tx: CosmosTransaction,
    pub msg: EventMessage,
    pub event: TxEvent,
}

impl CosmosEvent {
    pub fn kind(&self) -> &str {
        &self.event.kind
    }
}
