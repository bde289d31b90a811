use eyre::Result;

/// Persistence capability a handler hands its record to.
#[async_trait::async_trait]
pub trait Sink: Send + Sync {
    type Item;

    async fn save(&self, element: &Self::Item) -> Result<()>;
}
