use super::{validate_employee, InvalidEmployee};
use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        unique_ids,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::{create_employee::*, dtos::EmployeeWithDepartmentsDTO};
use birthdays_domain::{Department, Employee, NaiveDate, ID};
use birthdays_infra::BirthdaysContext;

const ADD_SUCCESS: &str = "Le collaborateur a été ajouté avec succès";

pub async fn create_employee_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateEmployeeUseCase {
        first_name: body.first_name,
        last_name: body.last_name,
        mail: body.mail,
        tel_number: body.tel_number,
        date_of_birth: body.date_of_birth,
        date_of_hire: body.date_of_hire,
        department_ids: unique_ids(body.departments.into_iter().map(|d| d.pk_department)),
    };

    execute(usecase, &ctx)
        .await
        .map(|(employee, departments)| {
            HttpResponse::Created().json(APIResponse::success(
                ADD_SUCCESS,
                EmployeeWithDepartmentsDTO::new(employee, departments),
            ))
        })
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct CreateEmployeeUseCase {
    first_name: String,
    last_name: String,
    mail: String,
    tel_number: String,
    date_of_birth: NaiveDate,
    date_of_hire: NaiveDate,
    department_ids: Vec<ID>,
}

#[derive(Debug)]
enum UseCaseError {
    Invalid(InvalidEmployee),
    Storage,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Invalid(e) => e.into(),
            UseCaseError::Storage => {
                Self::InternalError("Le collaborateur n'a pas pu être ajouté".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEmployeeUseCase {
    type Response = (Employee, Vec<Department>);

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEmployee";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        let employee = Employee::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.mail.clone(),
            self.tel_number.clone(),
            self.date_of_birth,
            self.date_of_hire,
        );
        let departments = validate_employee(&employee, &self.department_ids, ctx)
            .await
            .map_err(UseCaseError::Invalid)?;

        ctx.repos
            .employees
            .insert(&employee, &self.department_ids)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok((employee, departments))
    }
}
