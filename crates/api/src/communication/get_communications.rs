use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::{dtos::CommunicationDTO, get_communications::*};
use birthdays_domain::Communication;
use birthdays_infra::BirthdaysContext;

const GET_SUCCESS: &str = "Les communications ont été récupérées avec succès";

pub async fn get_communications_controller(
    http_req: HttpRequest,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;

    execute(GetCommunicationsUseCase {}, &ctx)
        .await
        .map(|communications| {
            let communications = communications
                .into_iter()
                .map(CommunicationDTO::new)
                .collect();
            HttpResponse::Ok().json(APIResponse::list(GET_SUCCESS, communications))
        })
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct GetCommunicationsUseCase {}

#[derive(Debug)]
enum UseCaseError {
    Storage,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Storage => {
                Self::InternalError("Les communications n'ont pas pu être récupérées".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCommunicationsUseCase {
    type Response = Vec<Communication>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCommunications";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .communications
            .find_all()
            .await
            .map_err(|_| UseCaseError::Storage)
    }
}
