use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::{dtos::EmployeeWithDepartmentsDTO, get_employees::*};
use birthdays_domain::{aggregate::aggregate, Department, Employee};
use birthdays_infra::BirthdaysContext;

const GET_SUCCESS: &str = "La liste des collaborateurs a été récupérée avec succès";

pub async fn get_employees_controller(
    http_req: HttpRequest,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;

    execute(GetEmployeesUseCase {}, &ctx)
        .await
        .map(|employees| {
            let employees = employees
                .into_iter()
                .map(|(employee, departments)| {
                    EmployeeWithDepartmentsDTO::new(employee, departments)
                })
                .collect();
            HttpResponse::Ok().json(APIResponse::list(GET_SUCCESS, employees))
        })
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct GetEmployeesUseCase {}

#[derive(Debug)]
enum UseCaseError {
    Storage,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Storage => Self::InternalError(
                "La liste des collaborateurs n'a pas pu être récupérée".into(),
            ),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEmployeesUseCase {
    type Response = Vec<(Employee, Vec<Department>)>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEmployees";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        let rows = ctx
            .repos
            .roster
            .find_rows()
            .await
            .map_err(|_| UseCaseError::Storage)?;

        let employees = aggregate(
            rows,
            |row| row.employee.id.clone(),
            |row| (row.employee, row.membership.map(|m| m.department)),
        )
        .into_iter()
        .map(|group| (group.parent, group.children))
        .collect();

        Ok(employees)
    }
}
