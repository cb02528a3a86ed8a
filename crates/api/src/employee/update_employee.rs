use super::{validate_employee, InvalidEmployee, EMPLOYEE_DOESNT_EXIST};
use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        unique_ids,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::{dtos::EmployeeWithDepartmentsDTO, update_employee::*};
use birthdays_domain::{Department, Employee, NaiveDate, ID};
use birthdays_infra::BirthdaysContext;

const UPDATE_SUCCESS: &str = "Le collaborateur a été modifié avec succès";

pub async fn update_employee_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = UpdateEmployeeUseCase {
        employee_id: path.pk_employee.clone(),
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
            HttpResponse::Ok().json(APIResponse::success(
                UPDATE_SUCCESS,
                EmployeeWithDepartmentsDTO::new(employee, departments),
            ))
        })
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct UpdateEmployeeUseCase {
    employee_id: ID,
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
    NotFound(ID),
    Invalid(InvalidEmployee),
    Storage,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(_) => Self::NotFound(EMPLOYEE_DOESNT_EXIST.into()),
            UseCaseError::Invalid(e) => e.into(),
            UseCaseError::Storage => {
                Self::InternalError("Le collaborateur n'a pas pu être modifié".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEmployeeUseCase {
    type Response = (Employee, Vec<Department>);

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEmployee";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        let mut employee = match ctx.repos.employees.find(&self.employee_id).await {
            Some(employee) => employee,
            None => return Err(UseCaseError::NotFound(self.employee_id.clone())),
        };
        employee.first_name = self.first_name.clone();
        employee.last_name = self.last_name.clone();
        employee.mail = self.mail.clone();
        employee.tel_number = self.tel_number.clone();
        employee.date_of_birth = self.date_of_birth;
        employee.date_of_hire = self.date_of_hire;

        let departments = validate_employee(&employee, &self.department_ids, ctx)
            .await
            .map_err(UseCaseError::Invalid)?;

        ctx.repos
            .employees
            .save(&employee, &self.department_ids)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok((employee, departments))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::employee::test_helpers::{department, employee, ymd};

    fn usecase(employee: &Employee, department_ids: Vec<ID>) -> UpdateEmployeeUseCase {
        UpdateEmployeeUseCase {
            employee_id: employee.id.clone(),
            first_name: employee.first_name.clone(),
            last_name: "Favre".into(),
            mail: employee.mail.clone(),
            tel_number: employee.tel_number.clone(),
            date_of_birth: employee.date_of_birth,
            date_of_hire: ymd(2012, 1, 1),
            department_ids,
        }
    }

    #[actix_web::test]
    async fn it_updates_employee_and_replaces_memberships() {
        let ctx = BirthdaysContext::create_inmemory();
        let (sales, _) = department(&ctx, "Ventes").await;
        let (finance, _) = department(&ctx, "Finance").await;
        let paul = employee("Paul", "paul@company.ch", "+41794444444");
        ctx.repos
            .employees
            .insert(&paul, &[sales.id.clone()])
            .await
            .unwrap();

        // Keeping its own mail and tel number is not a conflict
        let (updated, departments) = usecase(&paul, vec![finance.id.clone()])
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(updated.last_name, "Favre");
        assert_eq!(departments, vec![finance.clone()]);

        let memberships = ctx.repos.departments.find_memberships().await.unwrap();
        let paul_departments = memberships
            .iter()
            .filter(|m| m.employee_id == paul.id)
            .map(|m| m.department_id.clone())
            .collect::<Vec<_>>();
        assert_eq!(paul_departments, vec![finance.id.clone()]);
    }

    #[actix_web::test]
    async fn it_rejects_unknown_employee() {
        let ctx = BirthdaysContext::create_inmemory();
        let (sales, _) = department(&ctx, "Ventes").await;
        let ghost = employee("Ghost", "ghost@company.ch", "+41795555555");

        assert!(matches!(
            usecase(&ghost, vec![sales.id.clone()]).execute(&ctx).await,
            Err(UseCaseError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn it_rejects_mail_of_other_employee() {
        let ctx = BirthdaysContext::create_inmemory();
        let (sales, manager) = department(&ctx, "Ventes").await;
        let paul = employee("Paul", "paul@company.ch", "+41794444444");
        ctx.repos
            .employees
            .insert(&paul, &[sales.id.clone()])
            .await
            .unwrap();

        let mut usecase = usecase(&paul, vec![sales.id.clone()]);
        usecase.mail = manager.mail.clone();
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::Invalid(InvalidEmployee::AlreadyExists))
        ));
    }
}
