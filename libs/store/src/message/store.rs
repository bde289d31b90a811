use crate::client::{Client, encode_block_height};
use crate::message::model::TransferMessage;
use sqlx::Error;

#[derive(Clone)]
pub struct Store {
    client: Client,
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns `false` when a record with the same id already exists;
    /// the stored record is left untouched.
    pub async fn insert_transfer_message(&self, message: &TransferMessage) -> Result<bool, Error> {
        let query = r#"
            INSERT INTO transfer_messages (
                id, block_height, tx_hash, from_address, to_address, amount
            )
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO NOTHING
            "#;

        let block_height = encode_block_height(message.block_height)?;

        let result = sqlx::query(query)
            .bind(&message.id)
            .bind(block_height)
            .bind(&message.tx_hash)
            .bind(&message.from)
            .bind(&message.to)
            .bind(&message.amount)
            .execute(self.client.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn get_transfer_message(&self, id: &str) -> Result<Option<TransferMessage>, Error> {
        let query = r#"
            SELECT id, block_height, tx_hash, from_address, to_address, amount
            FROM transfer_messages
            WHERE id = ?
            LIMIT 1
            "#;
        let message =
            sqlx::query_as(query).bind(id).fetch_optional(self.client.pool()).await?;

        Ok(message)
    }
}
