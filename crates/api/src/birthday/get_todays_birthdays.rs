use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::{dtos::TodaysBirthdayDTO, get_todays_birthdays::*};
use birthdays_domain::views::{todays_birthdays, TodaysBirthday};
use birthdays_infra::BirthdaysContext;

const TODAY_SUCCESS: &str = "La liste des anniversaires d'aujourd'hui a été récupérée avec succès";
const TODAY_FAILURE: &str = "La liste des anniversaires d'aujourd'hui n'a pas pu être récupérée";

pub async fn get_todays_birthdays_controller(
    http_req: HttpRequest,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    // Admin only, unlike the month view
    protect_route(&http_req, &ctx)?;

    execute(GetTodaysBirthdaysUseCase {}, &ctx)
        .await
        .map(|birthdays| {
            let birthdays = birthdays.into_iter().map(TodaysBirthdayDTO::new).collect();
            HttpResponse::Ok().json(APIResponse::list(TODAY_SUCCESS, birthdays))
        })
        .map_err(BirthdaysError::from)
}

/// Employees whose birthday is today, each with all of its departments
#[derive(Debug)]
pub struct GetTodaysBirthdaysUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    Storage,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Storage => Self::InternalError(TODAY_FAILURE.into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetTodaysBirthdaysUseCase {
    type Response = Vec<TodaysBirthday>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTodaysBirthdays";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        let rows = ctx
            .repos
            .roster
            .find_rows()
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(todays_birthdays(ctx.today(), rows))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::birthday::test_helpers::{context_at, department, employee, ymd};

    #[actix_web::test]
    async fn it_returns_one_record_per_employee_with_all_departments() {
        let ctx = context_at(ymd(2024, 3, 15));
        let sales = department(&ctx, "Ventes", false, true, 10).await;
        let support = department(&ctx, "Support", true, false, 10).await;

        let born_today = employee("Alice", ymd(1990, 3, 15), ymd(2015, 6, 1));
        ctx.repos
            .employees
            .insert(&born_today, &[sales.id.clone(), support.id.clone()])
            .await
            .unwrap();
        let born_tomorrow = employee("Bob", ymd(1990, 3, 16), ymd(2015, 6, 1));
        ctx.repos
            .employees
            .insert(&born_tomorrow, &[sales.id.clone()])
            .await
            .unwrap();

        let birthdays = GetTodaysBirthdaysUseCase {}.execute(&ctx).await.unwrap();
        assert_eq!(birthdays.len(), 1);
        let birthday = &birthdays[0];
        assert_eq!(birthday.employee.id, born_today.id);
        assert_eq!(birthday.departments.len(), 2);

        // Departments come ordered by name
        assert_eq!(birthday.departments[0].name, "Support");
        assert!(birthday.departments[0].notify_by_sms);
        assert!(!birthday.departments[0].notify_by_mail);
        assert_eq!(
            birthday.departments[0].birthday_msg,
            "Joyeux anniversaire de la part de Support"
        );
        assert_eq!(birthday.departments[1].name, "Ventes");
        assert!(birthday.departments[1].notify_by_mail);
    }

    #[actix_web::test]
    async fn it_returns_nothing_when_nobody_is_born_today() {
        let ctx = context_at(ymd(2024, 3, 15));
        let sales = department(&ctx, "Ventes", false, true, 10).await;
        let bob = employee("Bob", ymd(1990, 3, 16), ymd(2015, 6, 1));
        ctx.repos
            .employees
            .insert(&bob, &[sales.id.clone()])
            .await
            .unwrap();

        let birthdays = GetTodaysBirthdaysUseCase {}.execute(&ctx).await.unwrap();
        assert!(birthdays.is_empty());
    }
}
