mod create_department;
mod delete_department;
mod get_departments;
mod update_department;

use crate::error::BirthdaysError;
use actix_web::web;
use birthdays_api_structs::dtos::DepartmentDTO;
use birthdays_domain::{Communication, Department, Employee, ID};
use birthdays_infra::BirthdaysContext;
use create_department::create_department_controller;
use delete_department::delete_department_controller;
use get_departments::get_departments_controller;
use update_department::update_department_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/departments", web::get().to(get_departments_controller));
    cfg.route("/departments", web::post().to(create_department_controller));
    cfg.route(
        "/departments/{pk_department}",
        web::put().to(update_department_controller),
    );
    cfg.route(
        "/departments/{pk_department}",
        web::delete().to(delete_department_controller),
    );
}

const DEPARTMENT_DOESNT_EXIST: &str = "Le département n'existe pas";
const DEPARTMENT_NAME_MISSING: &str = "Le nom du département doit être spécifié";

/// A `Department` with everything it references
#[derive(Debug)]
struct DepartmentDetails {
    department: Department,
    manager: Employee,
    communication: Communication,
    employees: Vec<Employee>,
}

impl DepartmentDetails {
    fn into_dto(self) -> DepartmentDTO {
        DepartmentDTO::new(
            self.department,
            self.manager,
            self.communication,
            self.employees,
        )
    }
}

#[derive(Debug)]
enum InvalidDepartment {
    AlreadyExists,
    EmployeeNotFound(ID),
    CommunicationNotFound(ID),
    Storage,
}

impl From<InvalidDepartment> for BirthdaysError {
    fn from(e: InvalidDepartment) -> Self {
        match e {
            InvalidDepartment::AlreadyExists => Self::Conflict("Le département existe déjà".into()),
            InvalidDepartment::EmployeeNotFound(employee_id) => Self::BadClientData(format!(
                "Le collaborateur fourni n'existe pas : {}",
                employee_id
            )),
            InvalidDepartment::CommunicationNotFound(communication_id) => Self::BadClientData(
                format!("La communication n'existe pas : {}", communication_id),
            ),
            InvalidDepartment::Storage => {
                Self::InternalError("Le département n'a pas pu être enregistré".into())
            }
        }
    }
}

/// Checks the `Department` against the rules shared by creation and update and
/// resolves what it references.
async fn validate_department(
    department: Department,
    employee_ids: &[ID],
    ctx: &BirthdaysContext,
) -> Result<DepartmentDetails, InvalidDepartment> {
    if let Some(existing) = ctx.repos.departments.find_by_name(&department.name).await {
        if existing.id != department.id {
            return Err(InvalidDepartment::AlreadyExists);
        }
    }

    let manager = ctx
        .repos
        .employees
        .find(&department.manager_id)
        .await
        .ok_or_else(|| InvalidDepartment::EmployeeNotFound(department.manager_id.clone()))?;

    let communication = ctx
        .repos
        .communications
        .find(&department.communication_id)
        .await
        .ok_or_else(|| {
            InvalidDepartment::CommunicationNotFound(department.communication_id.clone())
        })?;

    let mut employees = ctx
        .repos
        .employees
        .find_many(employee_ids)
        .await
        .map_err(|_| InvalidDepartment::Storage)?;
    if let Some(missing) = employee_ids
        .iter()
        .find(|id| !employees.iter().any(|e| e.id == **id))
    {
        return Err(InvalidDepartment::EmployeeNotFound(missing.clone()));
    }
    employees.sort_by(|a, b| (&a.first_name, &a.last_name).cmp(&(&b.first_name, &b.last_name)));

    Ok(DepartmentDetails {
        department,
        manager,
        communication,
        employees,
    })
}
