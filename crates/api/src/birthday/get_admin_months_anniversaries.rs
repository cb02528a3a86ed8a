use super::{MONTH_FAILURE, MONTH_SUCCESS};
use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::{
    dtos::AdminMonthAnniversaryDTO, get_admin_months_anniversaries::*,
};
use birthdays_domain::views::{admin_months_anniversaries, MonthAnniversary};
use birthdays_infra::BirthdaysContext;

pub async fn get_admin_months_anniversaries_controller(
    http_req: HttpRequest,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;

    execute(GetAdminMonthsAnniversariesUseCase {}, &ctx)
        .await
        .map(|anniversaries| {
            let anniversaries = anniversaries
                .into_iter()
                .map(AdminMonthAnniversaryDTO::new)
                .collect();
            HttpResponse::Ok().json(APIResponse::list(MONTH_SUCCESS, anniversaries))
        })
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct GetAdminMonthsAnniversariesUseCase {}

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
impl UseCase for GetAdminMonthsAnniversariesUseCase {
    type Response = Vec<MonthAnniversary>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAdminMonthsAnniversaries";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        let employees = ctx
            .repos
            .employees
            .find_all()
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(admin_months_anniversaries(
            ctx.today(),
            &employees,
            ctx.config.admin_view_window_days,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::birthday::test_helpers::{context_at, employee, ymd};

    #[actix_web::test]
    async fn it_looks_ahead_within_the_current_year() {
        let mut ctx = context_at(ymd(2024, 11, 1));
        ctx.config.admin_view_window_days = 180;

        let december = employee("Dora", ymd(1990, 12, 15), ymd(2021, 6, 1));
        let january = employee("Jules", ymd(1990, 1, 10), ymd(2021, 6, 1));
        let yesterday = employee("Yann", ymd(1990, 10, 31), ymd(2021, 6, 1));
        let today = employee("Tina", ymd(1994, 11, 1), ymd(2021, 6, 1));
        for e in [&december, &january, &yesterday, &today] {
            ctx.repos.employees.insert(e, &[]).await.unwrap();
        }

        let anniversaries = GetAdminMonthsAnniversariesUseCase {}
            .execute(&ctx)
            .await
            .unwrap();
        let names = anniversaries
            .iter()
            .map(|a| a.employee.first_name.as_str())
            .collect::<Vec<_>>();
        // January lies past the year boundary and is not looked at
        assert_eq!(names, vec!["Tina", "Dora"]);
        assert_eq!(anniversaries[0].event.years, 30);
        assert_eq!(
            anniversaries[0].event.label_with_years(),
            "Anniversaire important (30 ans)"
        );
    }
}
