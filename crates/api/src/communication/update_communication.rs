use super::{COMMUNICATION_DOESNT_EXIST, INVALID_NOTIFICATION_DELAY};
use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::{dtos::CommunicationDTO, update_communication::*};
use birthdays_domain::{Communication, ID};
use birthdays_infra::BirthdaysContext;

const UPDATE_SUCCESS: &str = "Les communications ont été modifiées avec succès";

pub async fn update_communication_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = UpdateCommunicationUseCase {
        communication_id: path.pk_communication.clone(),
        description: body.description,
        birthday_msg: body.birthday_msg,
        html_birthday_msg: body.html_birthday_msg,
        notification_delay: body.notification_delay,
    };

    execute(usecase, &ctx)
        .await
        .map(|communication| {
            HttpResponse::Ok().json(APIResponse::success(
                UPDATE_SUCCESS,
                CommunicationDTO::new(communication),
            ))
        })
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct UpdateCommunicationUseCase {
    communication_id: ID,
    description: String,
    birthday_msg: String,
    html_birthday_msg: String,
    notification_delay: i32,
}

#[derive(Debug)]
enum UseCaseError {
    InvalidNotificationDelay,
    NotFound(ID),
    Storage,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidNotificationDelay => {
                Self::BadClientData(INVALID_NOTIFICATION_DELAY.into())
            }
            UseCaseError::NotFound(_) => Self::NotFound(COMMUNICATION_DOESNT_EXIST.into()),
            UseCaseError::Storage => {
                Self::InternalError("Les communications n'ont pas pu être modifiées".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateCommunicationUseCase {
    type Response = Communication;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateCommunication";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        if !Communication::is_valid_notification_delay(self.notification_delay) {
            return Err(UseCaseError::InvalidNotificationDelay);
        }

        let mut communication = match ctx.repos.communications.find(&self.communication_id).await {
            Some(communication) => communication,
            None => return Err(UseCaseError::NotFound(self.communication_id.clone())),
        };
        communication.description = self.description.clone();
        communication.birthday_msg = self.birthday_msg.clone();
        communication.html_birthday_msg = self.html_birthday_msg.clone();
        communication.notification_delay = self.notification_delay;

        ctx.repos
            .communications
            .save(&communication)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(communication)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn usecase(communication_id: ID, notification_delay: i32) -> UpdateCommunicationUseCase {
        UpdateCommunicationUseCase {
            communication_id,
            description: "Direction".into(),
            birthday_msg: "Bon anniversaire".into(),
            html_birthday_msg: "<b>Bon anniversaire</b>".into(),
            notification_delay,
        }
    }

    #[actix_web::test]
    async fn it_updates_communication() {
        let ctx = BirthdaysContext::create_inmemory();
        let communication = Communication::new("Standard".into(), "a".into(), "b".into(), 7);
        ctx.repos.communications.insert(&communication).await.unwrap();

        let updated = usecase(communication.id.clone(), 21)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(updated.id, communication.id);

        let stored = ctx
            .repos
            .communications
            .find(&communication.id)
            .await
            .unwrap();
        assert_eq!(stored.description, "Direction");
        assert_eq!(stored.notification_delay, 21);
    }

    #[actix_web::test]
    async fn it_rejects_unknown_communication() {
        let ctx = BirthdaysContext::create_inmemory();
        assert!(matches!(
            usecase(ID::default(), 5).execute(&ctx).await,
            Err(UseCaseError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn it_rejects_invalid_delay() {
        let ctx = BirthdaysContext::create_inmemory();
        let communication = Communication::new("Standard".into(), "a".into(), "b".into(), 7);
        ctx.repos.communications.insert(&communication).await.unwrap();

        assert!(matches!(
            usecase(communication.id.clone(), 31).execute(&ctx).await,
            Err(UseCaseError::InvalidNotificationDelay)
        ));
    }
}
