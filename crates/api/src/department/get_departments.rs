use super::DepartmentDetails;
use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::get_departments::*;
use birthdays_infra::BirthdaysContext;
use tracing::warn;

const GET_SUCCESS: &str = "La liste des départements a été récupérée avec succès";

pub async fn get_departments_controller(
    http_req: HttpRequest,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;

    execute(GetDepartmentsUseCase {}, &ctx)
        .await
        .map(|departments| {
            let departments = departments
                .into_iter()
                .map(DepartmentDetails::into_dto)
                .collect();
            HttpResponse::Ok().json(APIResponse::list(GET_SUCCESS, departments))
        })
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct GetDepartmentsUseCase {}

#[derive(Debug)]
enum UseCaseError {
    Storage,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Storage => Self::InternalError(
                "La liste des départements n'a pas pu être récupérée".into(),
            ),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDepartmentsUseCase {
    type Response = Vec<DepartmentDetails>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetDepartments";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        let departments = ctx.repos.departments.find_all().await;
        let employees = ctx.repos.employees.find_all().await;
        let communications = ctx.repos.communications.find_all().await;
        let memberships = ctx.repos.departments.find_memberships().await;
        let (departments, employees, communications, memberships) =
            match (departments, employees, communications, memberships) {
                (Ok(d), Ok(e), Ok(c), Ok(m)) => (d, e, c, m),
                _ => return Err(UseCaseError::Storage),
            };

        let mut details = Vec::with_capacity(departments.len());
        for department in departments {
            let manager = employees.iter().find(|e| e.id == department.manager_id);
            let communication = communications
                .iter()
                .find(|c| c.id == department.communication_id);
            let (manager, communication) = match (manager, communication) {
                (Some(manager), Some(communication)) => (manager.clone(), communication.clone()),
                _ => {
                    warn!(
                        "Department {} references a missing manager or communication",
                        department.id
                    );
                    continue;
                }
            };

            // `employees` is already ordered by name
            let members = employees
                .iter()
                .filter(|e| {
                    memberships
                        .iter()
                        .any(|m| m.department_id == department.id && m.employee_id == e.id)
                })
                .cloned()
                .collect();

            details.push(DepartmentDetails {
                department,
                manager,
                communication,
                employees: members,
            });
        }

        Ok(details)
    }
}
