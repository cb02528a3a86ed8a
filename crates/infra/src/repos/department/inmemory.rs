use super::IDepartmentRepo;
use crate::repos::shared::{inmemory_db::InMemoryDatabase, inmemory_repo::*};
use birthdays_domain::{Department, Membership, ID};
use std::sync::Arc;

pub struct InMemoryDepartmentRepo {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryDepartmentRepo {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }

    fn replace_members(&self, department_id: &ID, employee_ids: &[ID]) {
        let mut memberships = lock(&self.db.memberships);
        memberships.retain(|m| m.department_id != *department_id);
        memberships.extend(employee_ids.iter().map(|employee_id| Membership {
            department_id: department_id.clone(),
            employee_id: employee_id.clone(),
        }));
    }
}

#[async_trait::async_trait]
impl IDepartmentRepo for InMemoryDepartmentRepo {
    async fn insert(&self, department: &Department, employee_ids: &[ID]) -> anyhow::Result<()> {
        insert(department, &self.db.departments);
        self.replace_members(&department.id, employee_ids);
        Ok(())
    }

    async fn save(&self, department: &Department, employee_ids: &[ID]) -> anyhow::Result<()> {
        save(department, &self.db.departments);
        self.replace_members(&department.id, employee_ids);
        Ok(())
    }

    async fn find(&self, department_id: &ID) -> Option<Department> {
        find(department_id, &self.db.departments)
    }

    async fn find_many(&self, department_ids: &[ID]) -> anyhow::Result<Vec<Department>> {
        Ok(find_by(&self.db.departments, |d| department_ids.contains(&d.id)))
    }

    async fn find_by_name(&self, name: &str) -> Option<Department> {
        find_by(&self.db.departments, |d| d.name == name)
            .into_iter()
            .next()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Department>> {
        let mut departments = find_all(&self.db.departments);
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(departments)
    }

    async fn find_by_manager(&self, employee_id: &ID) -> Vec<Department> {
        find_by(&self.db.departments, |d| d.manager_id == *employee_id)
    }

    async fn find_by_communication(&self, communication_id: &ID) -> Vec<Department> {
        find_by(&self.db.departments, |d| {
            d.communication_id == *communication_id
        })
    }

    async fn find_memberships(&self) -> anyhow::Result<Vec<Membership>> {
        Ok(find_all(&self.db.memberships))
    }

    async fn delete(&self, department_id: &ID) -> Option<Department> {
        let deleted = delete(department_id, &self.db.departments)?;
        delete_by(&self.db.memberships, |m| m.department_id == *department_id);
        Some(deleted)
    }
}
