mod inmemory;
mod postgres;

use birthdays_domain::{Communication, ID};
pub use inmemory::InMemoryCommunicationRepo;
pub use postgres::PostgresCommunicationRepo;

#[async_trait::async_trait]
pub trait ICommunicationRepo: Send + Sync {
    async fn insert(&self, communication: &Communication) -> anyhow::Result<()>;
    async fn save(&self, communication: &Communication) -> anyhow::Result<()>;
    async fn find(&self, communication_id: &ID) -> Option<Communication>;
    /// Ordered by description
    async fn find_all(&self) -> anyhow::Result<Vec<Communication>>;
    async fn delete(&self, communication_id: &ID) -> Option<Communication>;
}
