use super::IRosterRepo;
use crate::repos::shared::{inmemory_db::InMemoryDatabase, inmemory_repo::find_all};
use birthdays_domain::roster::{MembershipDetails, RosterRow};
use std::sync::Arc;

pub struct InMemoryRosterRepo {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryRosterRepo {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl IRosterRepo for InMemoryRosterRepo {
    async fn find_rows(&self) -> anyhow::Result<Vec<RosterRow>> {
        let mut employees = find_all(&self.db.employees);
        let departments = find_all(&self.db.departments);
        let communications = find_all(&self.db.communications);
        let memberships = find_all(&self.db.memberships);

        employees.sort_by(|a, b| {
            (&a.first_name, &a.last_name, a.id.inner_ref()).cmp(&(
                &b.first_name,
                &b.last_name,
                b.id.inner_ref(),
            ))
        });

        let mut rows = Vec::new();
        for employee in &employees {
            let mut details = memberships
                .iter()
                .filter(|m| m.employee_id == employee.id)
                .filter_map(|m| departments.iter().find(|d| d.id == m.department_id))
                .filter_map(|department| {
                    let communication = communications
                        .iter()
                        .find(|c| c.id == department.communication_id)?;
                    let manager = employees.iter().find(|e| e.id == department.manager_id)?;
                    Some(MembershipDetails {
                        department: department.clone(),
                        communication: communication.clone(),
                        manager: manager.clone(),
                    })
                })
                .collect::<Vec<_>>();
            details.sort_by(|a, b| a.department.name.cmp(&b.department.name));

            if details.is_empty() {
                rows.push(RosterRow {
                    employee: employee.clone(),
                    membership: None,
                });
            }
            rows.extend(details.into_iter().map(|membership| RosterRow {
                employee: employee.clone(),
                membership: Some(membership),
            }));
        }

        Ok(rows)
    }
}
