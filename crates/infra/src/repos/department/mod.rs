mod inmemory;
mod postgres;

use birthdays_domain::{Department, Membership, ID};
pub use inmemory::InMemoryDepartmentRepo;
pub use postgres::PostgresDepartmentRepo;

#[async_trait::async_trait]
pub trait IDepartmentRepo: Send + Sync {
    /// Inserts the `Department` together with its members
    async fn insert(&self, department: &Department, employee_ids: &[ID]) -> anyhow::Result<()>;
    /// Updates the `Department` and replaces all of its members
    async fn save(&self, department: &Department, employee_ids: &[ID]) -> anyhow::Result<()>;
    async fn find(&self, department_id: &ID) -> Option<Department>;
    async fn find_many(&self, department_ids: &[ID]) -> anyhow::Result<Vec<Department>>;
    async fn find_by_name(&self, name: &str) -> Option<Department>;
    /// Ordered by name
    async fn find_all(&self) -> anyhow::Result<Vec<Department>>;
    async fn find_by_manager(&self, employee_id: &ID) -> Vec<Department>;
    async fn find_by_communication(&self, communication_id: &ID) -> Vec<Department>;
    async fn find_memberships(&self) -> anyhow::Result<Vec<Membership>>;
    async fn delete(&self, department_id: &ID) -> Option<Department>;
}
