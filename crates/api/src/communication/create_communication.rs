use super::INVALID_NOTIFICATION_DELAY;
use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::{create_communication::*, dtos::CommunicationDTO};
use birthdays_domain::Communication;
use birthdays_infra::BirthdaysContext;

const ADD_SUCCESS: &str = "Les communications ont été ajoutées avec succès";

pub async fn create_communication_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateCommunicationUseCase {
        description: body.description,
        birthday_msg: body.birthday_msg,
        html_birthday_msg: body.html_birthday_msg,
        notification_delay: body.notification_delay,
    };

    execute(usecase, &ctx)
        .await
        .map(|communication| {
            HttpResponse::Created().json(APIResponse::success(
                ADD_SUCCESS,
                CommunicationDTO::new(communication),
            ))
        })
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct CreateCommunicationUseCase {
    description: String,
    birthday_msg: String,
    html_birthday_msg: String,
    notification_delay: i32,
}

#[derive(Debug)]
enum UseCaseError {
    InvalidNotificationDelay,
    Storage,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidNotificationDelay => {
                Self::BadClientData(INVALID_NOTIFICATION_DELAY.into())
            }
            UseCaseError::Storage => {
                Self::InternalError("Les communications n'ont pas pu être ajoutées".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCommunicationUseCase {
    type Response = Communication;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCommunication";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        if !Communication::is_valid_notification_delay(self.notification_delay) {
            return Err(UseCaseError::InvalidNotificationDelay);
        }

        let communication = Communication::new(
            self.description.clone(),
            self.birthday_msg.clone(),
            self.html_birthday_msg.clone(),
            self.notification_delay,
        );
        ctx.repos
            .communications
            .insert(&communication)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(communication)
    }
}
