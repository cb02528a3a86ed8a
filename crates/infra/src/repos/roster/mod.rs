mod inmemory;
mod postgres;

use birthdays_domain::roster::RosterRow;
pub use inmemory::InMemoryRosterRepo;
pub use postgres::PostgresRosterRepo;

/// Read side joining employees with their departments, communications and managers
#[async_trait::async_trait]
pub trait IRosterRepo: Send + Sync {
    /// One row per membership, plus one row without membership for employees without any.
    /// Ordered by employee first name, last name and id, then by department name.
    async fn find_rows(&self) -> anyhow::Result<Vec<RosterRow>>;
}
