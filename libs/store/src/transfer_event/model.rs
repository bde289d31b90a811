use sqlx::FromRow;

/// A `transfer` event. Identified by `{tx_hash}-{msg_index}-{event_index}`.
/// Attribute fields stay `None` when the event did not carry the key.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct TransferEvent {
    pub id: String,
    #[sqlx(try_from = "i64")]
    pub block_height: u64,
    pub tx_hash: String,
    pub recipient: Option<String>,
    pub amount: Option<String>,
    pub sender: Option<String>,
}

pub fn event_id(tx_hash: &str, msg_index: u32, event_index: u32) -> String {
    format!("{tx_hash}-{msg_index}-{event_index}")
}

impl TransferEvent {
    pub fn new(id: String, block_height: u64, tx_hash: String) -> Self {
        Self { id, block_height, tx_hash, recipient: None, amount: None, sender: None }
    }
}
