use super::COMMUNICATION_DOESNT_EXIST;
use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::delete_communication::*;
use birthdays_domain::{Communication, ID};
use birthdays_infra::BirthdaysContext;

const DELETE_SUCCESS: &str = "Les communications ont été supprimées avec succès";
const COMMUNICATION_IS_USED: &str =
    "Cette communication ne peut pas être supprimée, elle est utilisée par au moins un département";

pub async fn delete_communication_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;

    let usecase = DeleteCommunicationUseCase {
        communication_id: path.pk_communication.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::success_without_data(DELETE_SUCCESS)))
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct DeleteCommunicationUseCase {
    communication_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    InUse(ID),
    NotFound(ID),
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InUse(_) => Self::Conflict(COMMUNICATION_IS_USED.into()),
            UseCaseError::NotFound(_) => Self::NotFound(COMMUNICATION_DOESNT_EXIST.into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteCommunicationUseCase {
    type Response = Communication;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCommunication";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        let departments = ctx
            .repos
            .departments
            .find_by_communication(&self.communication_id)
            .await;
        if !departments.is_empty() {
            return Err(UseCaseError::InUse(self.communication_id.clone()));
        }

        ctx.repos
            .communications
            .delete(&self.communication_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.communication_id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use birthdays_domain::{Department, Employee, NaiveDate};

    #[actix_web::test]
    async fn it_deletes_unused_communication() {
        let ctx = BirthdaysContext::create_inmemory();
        let communication = Communication::new("Standard".into(), "a".into(), "b".into(), 7);
        ctx.repos.communications.insert(&communication).await.unwrap();

        let mut usecase = DeleteCommunicationUseCase {
            communication_id: communication.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());
        assert!(ctx.repos.communications.find(&communication.id).await.is_none());

        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn it_rejects_communication_in_use() {
        let ctx = BirthdaysContext::create_inmemory();
        let communication = Communication::new("Standard".into(), "a".into(), "b".into(), 7);
        ctx.repos.communications.insert(&communication).await.unwrap();
        let date = NaiveDate::from_ymd_opt(1980, 5, 5).unwrap();
        let manager = Employee::new(
            "Anne".into(),
            "Martin".into(),
            "anne@company.ch".into(),
            "+41790000001".into(),
            date,
            date,
        );
        ctx.repos.employees.insert(&manager, &[]).await.unwrap();
        let department = Department::new(
            "Ventes".into(),
            false,
            true,
            manager.id.clone(),
            communication.id.clone(),
        );
        ctx.repos
            .departments
            .insert(&department, &[manager.id.clone()])
            .await
            .unwrap();

        let mut usecase = DeleteCommunicationUseCase {
            communication_id: communication.id.clone(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InUse(_))
        ));
        assert!(ctx.repos.communications.find(&communication.id).await.is_some());
    }
}
