use crate::client::{Client, encode_block_height};
use crate::transfer_event::model::TransferEvent;
use sqlx::Error;

#[derive(Clone)]
pub struct Store {
    client: Client,
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns `false` when a record with the same id already exists.
    pub async fn insert_transfer_event(&self, event: &TransferEvent) -> Result<bool, Error> {
        let query = r#"
            INSERT INTO transfer_events (
                id, block_height, tx_hash, recipient, amount, sender
            )
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO NOTHING
            "#;

        let block_height = encode_block_height(event.block_height)?;

        let result = sqlx::query(query)
            .bind(&event.id)
            .bind(block_height)
            .bind(&event.tx_hash)
            .bind(&event.recipient)
            .bind(&event.amount)
            .bind(&event.sender)
            .execute(self.client.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn get_transfer_event(&self, id: &str) -> Result<Option<TransferEvent>, Error> {
        let query = r#"
            SELECT id, block_height, tx_hash, recipient, amount, sender
            FROM transfer_events
            WHERE id = ?
            LIMIT 1
            "#;
        let event = sqlx::query_as(query).bind(id).fetch_optional(self.client.pool()).await?;

        Ok(event)
    }
}
