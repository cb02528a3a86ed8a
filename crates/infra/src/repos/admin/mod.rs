mod inmemory;
mod postgres;

use birthdays_domain::Admin;
pub use inmemory::InMemoryAdminRepo;
pub use postgres::PostgresAdminRepo;

#[async_trait::async_trait]
pub trait IAdminRepo: Send + Sync {
    async fn insert(&self, admin: &Admin) -> anyhow::Result<()>;
    async fn find_by_mail(&self, mail: &str) -> Option<Admin>;
}
