use sqlx::FromRow;

/// A bank send message. Identified by `{tx_hash}-{msg_index}`.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct TransferMessage {
    pub id: String,
    #[sqlx(try_from = "i64")]
    pub block_height: u64,
    pub tx_hash: String,
    #[sqlx(rename = "from_address")]
    pub from: String,
    #[sqlx(rename = "to_address")]
    pub to: String,
    /// Coin list serialized as JSON, e.g. `[{"denom":"atom","amount":"5"}]`.
    pub amount: String,
}

pub fn message_id(tx_hash: &str, msg_index: u32) -> String {
    format!("{tx_hash}-{msg_index}")
}
