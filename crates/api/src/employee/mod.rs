mod create_employee;
mod delete_employee;
mod get_employees;
mod update_employee;

use crate::error::BirthdaysError;
use actix_web::web;
use birthdays_domain::{Department, Employee, ID};
use birthdays_infra::BirthdaysContext;
use create_employee::create_employee_controller;
use delete_employee::delete_employee_controller;
use get_employees::get_employees_controller;
use update_employee::update_employee_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/employees", web::get().to(get_employees_controller));
    cfg.route("/employees", web::post().to(create_employee_controller));
    cfg.route(
        "/employees/{pk_employee}",
        web::put().to(update_employee_controller),
    );
    cfg.route(
        "/employees/{pk_employee}",
        web::delete().to(delete_employee_controller),
    );
}

const EMPLOYEE_DOESNT_EXIST: &str = "Le collaborateur n'existe pas";

#[derive(Debug)]
enum InvalidEmployee {
    NoDepartment,
    HiredBeforeBirth,
    DepartmentNotFound(ID),
    AlreadyExists,
    Storage,
}

impl From<InvalidEmployee> for BirthdaysError {
    fn from(e: InvalidEmployee) -> Self {
        match e {
            InvalidEmployee::NoDepartment => Self::BadClientData(
                "Les départements doivent être sous forme de tableau et au moins contenir un département".into(),
            ),
            InvalidEmployee::HiredBeforeBirth => Self::BadClientData(
                "La date d'engagement ne peut pas être antérieure à la date de naissance".into(),
            ),
            InvalidEmployee::DepartmentNotFound(department_id) => Self::BadClientData(format!(
                "Le département fourni n'existe pas : {}",
                department_id
            )),
            InvalidEmployee::AlreadyExists => Self::Conflict("Le collaborateur existe déjà".into()),
            InvalidEmployee::Storage => {
                Self::InternalError("Le collaborateur n'a pas pu être enregistré".into())
            }
        }
    }
}

/// Checks the `Employee` against the rules shared by creation and update.
/// Returns its departments.
///
/// An `Employee` belongs to at least one `Department`, except while no `Department` exists
/// at all. That is how the first managers get created.
async fn validate_employee(
    employee: &Employee,
    department_ids: &[ID],
    ctx: &BirthdaysContext,
) -> Result<Vec<Department>, InvalidEmployee> {
    if department_ids.is_empty() {
        let departments = ctx
            .repos
            .departments
            .find_all()
            .await
            .map_err(|_| InvalidEmployee::Storage)?;
        if !departments.is_empty() {
            return Err(InvalidEmployee::NoDepartment);
        }
    }
    if !employee.has_valid_dates() {
        return Err(InvalidEmployee::HiredBeforeBirth);
    }

    let departments = ctx
        .repos
        .departments
        .find_many(department_ids)
        .await
        .map_err(|_| InvalidEmployee::Storage)?;
    if let Some(missing) = department_ids
        .iter()
        .find(|id| !departments.iter().any(|d| d.id == **id))
    {
        return Err(InvalidEmployee::DepartmentNotFound(missing.clone()));
    }

    let conflicts = ctx
        .repos
        .employees
        .find_by_mail_or_tel_number(&employee.mail, &employee.tel_number)
        .await;
    if conflicts.iter().any(|other| employee.conflicts_with(other)) {
        return Err(InvalidEmployee::AlreadyExists);
    }

    Ok(departments)
}

#[cfg(test)]
mod test_helpers {
    use birthdays_domain::{Communication, Department, Employee, Membership, NaiveDate, ID};
    use birthdays_infra::{BirthdaysContext, IDepartmentRepo};
    use std::sync::Arc;

    pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn employee(first_name: &str, mail: &str, tel_number: &str) -> Employee {
        Employee::new(
            first_name.into(),
            "Muller".into(),
            mail.into(),
            tel_number.into(),
            ymd(1985, 4, 12),
            ymd(2010, 9, 1),
        )
    }

    /// A department managed by a fresh employee who is also its only member
    pub async fn department(ctx: &BirthdaysContext, name: &str) -> (Department, Employee) {
        let communication = Communication::new("Standard".into(), "a".into(), "b".into(), 7);
        ctx.repos.communications.insert(&communication).await.unwrap();
        let manager = employee(
            &format!("Manager {}", name),
            &format!("manager@{}.ch", name.to_lowercase()),
            &format!("+41 {}", name),
        );
        ctx.repos.employees.insert(&manager, &[]).await.unwrap();
        let department = Department::new(
            name.into(),
            true,
            true,
            manager.id.clone(),
            communication.id.clone(),
        );
        ctx.repos
            .departments
            .insert(&department, &[manager.id.clone()])
            .await
            .unwrap();
        (department, manager)
    }

    /// Department storage whose bulk lookup is down, everything else is delegated
    pub struct DepartmentsDown {
        pub inner: Arc<dyn IDepartmentRepo>,
    }

    #[async_trait::async_trait]
    impl IDepartmentRepo for DepartmentsDown {
        async fn insert(&self, department: &Department, employee_ids: &[ID]) -> anyhow::Result<()> {
            self.inner.insert(department, employee_ids).await
        }

        async fn save(&self, department: &Department, employee_ids: &[ID]) -> anyhow::Result<()> {
            self.inner.save(department, employee_ids).await
        }

        async fn find(&self, department_id: &ID) -> Option<Department> {
            self.inner.find(department_id).await
        }

        async fn find_many(&self, _department_ids: &[ID]) -> anyhow::Result<Vec<Department>> {
            Err(anyhow::Error::msg("Connection refused"))
        }

        async fn find_by_name(&self, name: &str) -> Option<Department> {
            self.inner.find_by_name(name).await
        }

        async fn find_all(&self) -> anyhow::Result<Vec<Department>> {
            self.inner.find_all().await
        }

        async fn find_by_manager(&self, employee_id: &ID) -> Vec<Department> {
            self.inner.find_by_manager(employee_id).await
        }

        async fn find_by_communication(&self, communication_id: &ID) -> Vec<Department> {
            self.inner.find_by_communication(communication_id).await
        }

        async fn find_memberships(&self) -> anyhow::Result<Vec<Membership>> {
            self.inner.find_memberships().await
        }

        async fn delete(&self, department_id: &ID) -> Option<Department> {
            self.inner.delete(department_id).await
        }
    }
}
