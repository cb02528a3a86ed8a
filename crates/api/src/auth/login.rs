use crate::{
    error::BirthdaysError,
    shared::{
        auth::issue_token,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use birthdays_api_structs::login::*;
use birthdays_infra::BirthdaysContext;
use birthdays_utils::verify_password;

const LOGIN_SUCCESS: &str = "Vous êtes désormais authentifié !";
const LOGIN_DATA_INVALID: &str = "L'adresse mail et le mot de passe doivent être spécifiés";
const INVALID_CREDENTIALS: &str = "Les identifiants d'authentification sont invalides";

pub async fn login_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    let body = body.0;
    let usecase = LoginUseCase {
        mail: body.mail,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::success(LOGIN_SUCCESS, res)))
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct LoginUseCase {
    mail: String,
    password: String,
}

#[derive(Debug)]
enum UseCaseError {
    MissingCredentials,
    InvalidCredentials,
    TokenIssuing,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingCredentials => Self::BadClientData(LOGIN_DATA_INVALID.into()),
            UseCaseError::InvalidCredentials => Self::Forbidden(INVALID_CREDENTIALS.into()),
            UseCaseError::TokenIssuing => {
                Self::InternalError("Le token JWT n'a pas pu être généré".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUseCase {
    type Response = LoginDTO;

    type Error = UseCaseError;

    const NAME: &'static str = "Login";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        if self.mail.trim().is_empty() || self.password.is_empty() {
            return Err(UseCaseError::MissingCredentials);
        }

        let admin = ctx
            .repos
            .admins
            .find_by_mail(self.mail.trim())
            .await
            .ok_or(UseCaseError::InvalidCredentials)?;
        if !verify_password(&self.password, &admin.password_hash) {
            return Err(UseCaseError::InvalidCredentials);
        }

        let (token, expires_at) =
            issue_token(&admin, ctx).map_err(|_| UseCaseError::TokenIssuing)?;

        Ok(LoginDTO {
            mail: admin.mail,
            token,
            expires_at,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use birthdays_infra::{seed_admin, AdminSeed};

    async fn setup() -> BirthdaysContext {
        let ctx = BirthdaysContext::create_inmemory();
        seed_admin(
            &ctx,
            &AdminSeed {
                mail: "hr@company.ch".into(),
                password: "s3cret".into(),
            },
        )
        .await
        .unwrap();
        ctx
    }

    #[actix_web::test]
    async fn it_logs_in_with_valid_credentials() {
        let ctx = setup().await;
        let mut usecase = LoginUseCase {
            mail: "hr@company.ch".into(),
            password: "s3cret".into(),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.mail, "hr@company.ch");
        assert!(!res.token.is_empty());
        assert!(res.expires_at > ctx.sys.get_timestamp_millis() / 1000);
    }

    #[actix_web::test]
    async fn it_rejects_wrong_password_and_unknown_mail() {
        let ctx = setup().await;
        let mut usecase = LoginUseCase {
            mail: "hr@company.ch".into(),
            password: "wrong".into(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidCredentials)
        ));

        let mut usecase = LoginUseCase {
            mail: "ceo@company.ch".into(),
            password: "s3cret".into(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidCredentials)
        ));
    }

    #[actix_web::test]
    async fn it_rejects_missing_credentials() {
        let ctx = setup().await;
        let mut usecase = LoginUseCase {
            mail: "".into(),
            password: "".into(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::MissingCredentials)
        ));
    }
}
