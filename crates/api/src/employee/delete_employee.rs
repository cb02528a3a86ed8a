use super::EMPLOYEE_DOESNT_EXIST;
use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::delete_employee::*;
use birthdays_domain::{Employee, ID};
use birthdays_infra::BirthdaysContext;

const DELETE_SUCCESS: &str = "Le collaborateur a été supprimé avec succès";

pub async fn delete_employee_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;

    let usecase = DeleteEmployeeUseCase {
        employee_id: path.pk_employee.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::success_without_data(DELETE_SUCCESS)))
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct DeleteEmployeeUseCase {
    employee_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    /// Name of the department the employee manages
    IsManager(String),
    NotFound(ID),
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::IsManager(department_name) => Self::Conflict(format!(
                "Le collaborateur ne peut pas être supprimé, il est responsable d'un département : {}",
                department_name
            )),
            UseCaseError::NotFound(_) => Self::NotFound(EMPLOYEE_DOESNT_EXIST.into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEmployeeUseCase {
    type Response = Employee;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEmployee";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        let managed = ctx.repos.departments.find_by_manager(&self.employee_id).await;
        if let Some(department) = managed.into_iter().next() {
            return Err(UseCaseError::IsManager(department.name));
        }

        ctx.repos
            .employees
            .delete(&self.employee_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.employee_id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::employee::test_helpers::{department, employee};

    #[actix_web::test]
    async fn it_deletes_employee_and_memberships() {
        let ctx = BirthdaysContext::create_inmemory();
        let (sales, _) = department(&ctx, "Ventes").await;
        let paul = employee("Paul", "paul@company.ch", "+41794444444");
        ctx.repos
            .employees
            .insert(&paul, &[sales.id.clone()])
            .await
            .unwrap();

        let mut usecase = DeleteEmployeeUseCase {
            employee_id: paul.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());
        assert!(ctx.repos.employees.find(&paul.id).await.is_none());
        let memberships = ctx.repos.departments.find_memberships().await.unwrap();
        assert!(memberships.iter().all(|m| m.employee_id != paul.id));

        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn it_rejects_deleting_a_manager() {
        let ctx = BirthdaysContext::create_inmemory();
        let (_, manager) = department(&ctx, "Ventes").await;

        let mut usecase = DeleteEmployeeUseCase {
            employee_id: manager.id.clone(),
        };
        match usecase.execute(&ctx).await {
            Err(UseCaseError::IsManager(name)) => assert_eq!(name, "Ventes"),
            other => panic!("Expected manager conflict, got: {:?}", other),
        }
        assert!(ctx.repos.employees.find(&manager.id).await.is_some());
    }
}
