mod inmemory;
mod postgres;

use birthdays_domain::{Employee, ID};
pub use inmemory::InMemoryEmployeeRepo;
pub use postgres::PostgresEmployeeRepo;

#[async_trait::async_trait]
pub trait IEmployeeRepo: Send + Sync {
    /// Inserts the `Employee` together with its memberships
    async fn insert(&self, employee: &Employee, department_ids: &[ID]) -> anyhow::Result<()>;
    /// Updates the `Employee` and replaces all of its memberships
    async fn save(&self, employee: &Employee, department_ids: &[ID]) -> anyhow::Result<()>;
    async fn find(&self, employee_id: &ID) -> Option<Employee>;
    async fn find_many(&self, employee_ids: &[ID]) -> anyhow::Result<Vec<Employee>>;
    /// Ordered by first name, then last name
    async fn find_all(&self) -> anyhow::Result<Vec<Employee>>;
    async fn find_by_mail_or_tel_number(&self, mail: &str, tel_number: &str) -> Vec<Employee>;
    async fn delete(&self, employee_id: &ID) -> Option<Employee>;
}
