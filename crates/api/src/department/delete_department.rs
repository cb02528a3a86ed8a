use super::DEPARTMENT_DOESNT_EXIST;
use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::delete_department::*;
use birthdays_domain::{Department, ID};
use birthdays_infra::BirthdaysContext;

const DELETE_SUCCESS: &str = "Le département a été supprimé avec succès";

pub async fn delete_department_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;

    let usecase = DeleteDepartmentUseCase {
        department_id: path.pk_department.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::success_without_data(DELETE_SUCCESS)))
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct DeleteDepartmentUseCase {
    department_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    HasEmployees(ID),
    Storage,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(_) => Self::NotFound(DEPARTMENT_DOESNT_EXIST.into()),
            UseCaseError::HasEmployees(_) => Self::Conflict(
                "Le département ne peut pas être supprimé, il contient encore des collaborateurs"
                    .into(),
            ),
            UseCaseError::Storage => {
                Self::InternalError("Le département n'a pas pu être supprimé".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteDepartmentUseCase {
    type Response = Department;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteDepartment";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.departments.find(&self.department_id).await.is_none() {
            return Err(UseCaseError::NotFound(self.department_id.clone()));
        }

        let memberships = ctx
            .repos
            .departments
            .find_memberships()
            .await
            .map_err(|_| UseCaseError::Storage)?;
        if memberships
            .iter()
            .any(|m| m.department_id == self.department_id)
        {
            return Err(UseCaseError::HasEmployees(self.department_id.clone()));
        }

        ctx.repos
            .departments
            .delete(&self.department_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.department_id.clone()))
    }
}
