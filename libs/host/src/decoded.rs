use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::message::CosmosMessage;

/// A single coin amount. Field order is the canonical serialization order.
///
/// Keys other than `denom` and `amount` are dropped on decode, so they never
/// reach the serialized amount string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

/// Fully decoded `/cosmos.bank.v1beta1.MsgSend` body.
///
/// Either every field is present or conversion fails; a partially decoded
/// payload never produces a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSend {
    pub from_address: String,
    pub to_address: String,
    pub amount: Vec<Coin>,
}

impl TryFrom<&Value> for MsgSend {
    type Error = eyre::Report;

    fn try_from(decoded: &Value) -> Result<Self> {
        MsgSend::deserialize(decoded).map_err(|e| eyre!("malformed decoded message: {e}"))
    }
}

impl TryFrom<&CosmosMessage> for MsgSend {
    type Error = eyre::Report;

    fn try_from(msg: &CosmosMessage) -> Result<Self> {
        (&msg.msg.decoded_msg).try_into()
    }
}
