use super::{MONTH_FAILURE, MONTH_SUCCESS};
use crate::{
    error::BirthdaysError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use birthdays_api_structs::{dtos::MonthAnniversaryDTO, get_months_anniversaries::*};
use birthdays_domain::views::{months_anniversaries, MonthAnniversary};
use birthdays_infra::BirthdaysContext;

pub async fn get_months_anniversaries_controller(
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    execute(GetMonthsAnniversariesUseCase {}, &ctx)
        .await
        .map(|anniversaries| {
            let anniversaries = anniversaries
                .into_iter()
                .map(MonthAnniversaryDTO::new)
                .collect();
            HttpResponse::Ok().json(APIResponse::list(MONTH_SUCCESS, anniversaries))
        })
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct GetMonthsAnniversariesUseCase {}

#[derive(Debug)]
enum UseCaseError {
    Storage,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Storage => Self::InternalError(MONTH_FAILURE.into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMonthsAnniversariesUseCase {
    type Response = Vec<MonthAnniversary>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMonthsAnniversaries";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        let employees = ctx
            .repos
            .employees
            .find_all()
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(months_anniversaries(ctx.today(), &employees))
    }
}
