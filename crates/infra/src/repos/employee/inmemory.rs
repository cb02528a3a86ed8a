use super::IEmployeeRepo;
use crate::repos::shared::{inmemory_db::InMemoryDatabase, inmemory_repo::*};
use birthdays_domain::{Employee, Membership, ID};
use std::sync::Arc;

pub struct InMemoryEmployeeRepo {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryEmployeeRepo {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }

    fn replace_memberships(&self, employee_id: &ID, department_ids: &[ID]) {
        let mut memberships = lock(&self.db.memberships);
        memberships.retain(|m| m.employee_id != *employee_id);
        memberships.extend(department_ids.iter().map(|department_id| Membership {
            department_id: department_id.clone(),
            employee_id: employee_id.clone(),
        }));
    }
}

#[async_trait::async_trait]
impl IEmployeeRepo for InMemoryEmployeeRepo {
    async fn insert(&self, employee: &Employee, department_ids: &[ID]) -> anyhow::Result<()> {
        insert(employee, &self.db.employees);
        self.replace_memberships(&employee.id, department_ids);
        Ok(())
    }

    async fn save(&self, employee: &Employee, department_ids: &[ID]) -> anyhow::Result<()> {
        save(employee, &self.db.employees);
        self.replace_memberships(&employee.id, department_ids);
        Ok(())
    }

    async fn find(&self, employee_id: &ID) -> Option<Employee> {
        find(employee_id, &self.db.employees)
    }

    async fn find_many(&self, employee_ids: &[ID]) -> anyhow::Result<Vec<Employee>> {
        Ok(find_by(&self.db.employees, |e| employee_ids.contains(&e.id)))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Employee>> {
        let mut employees = find_all(&self.db.employees);
        employees.sort_by(|a, b| {
            (&a.first_name, &a.last_name).cmp(&(&b.first_name, &b.last_name))
        });
        Ok(employees)
    }

    async fn find_by_mail_or_tel_number(&self, mail: &str, tel_number: &str) -> Vec<Employee> {
        find_by(&self.db.employees, |e| {
            e.mail == mail || e.tel_number == tel_number
        })
    }

    async fn delete(&self, employee_id: &ID) -> Option<Employee> {
        let deleted = delete(employee_id, &self.db.employees)?;
        delete_by(&self.db.memberships, |m| m.employee_id == *employee_id);
        Some(deleted)
    }
}
