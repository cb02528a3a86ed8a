use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::{dtos::SpecialAnniversaryDTO, get_special_anniversaries::*};
use birthdays_domain::views::{special_anniversaries, SpecialAnniversary};
use birthdays_infra::BirthdaysContext;

const SPECIAL_SUCCESS: &str = "La liste des anniversaires spéciaux a été récupérée avec succès";
const SPECIAL_FAILURE: &str = "La liste des anniversaires spéciaux n'a pas pu être récupérée";

pub async fn get_special_anniversaries_controller(
    http_req: HttpRequest,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;

    execute(GetSpecialAnniversariesUseCase {}, &ctx)
        .await
        .map(|anniversaries| {
            let anniversaries = anniversaries
                .into_iter()
                .map(SpecialAnniversaryDTO::new)
                .collect();
            HttpResponse::Ok().json(APIResponse::list(SPECIAL_SUCCESS, anniversaries))
        })
        .map_err(BirthdaysError::from)
}

/// Milestone anniversaries the department managers must be reminded of today
#[derive(Debug)]
pub struct GetSpecialAnniversariesUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    Storage,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Storage => Self::InternalError(SPECIAL_FAILURE.into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSpecialAnniversariesUseCase {
    type Response = Vec<SpecialAnniversary>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetSpecialAnniversaries";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        let rows = ctx
            .repos
            .roster
            .find_rows()
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(special_anniversaries(ctx.today(), rows))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::birthday::test_helpers::{context_at, department, employee, ymd};
    use birthdays_domain::AnniversaryKind;

    #[actix_web::test]
    async fn it_finds_milestones_at_each_department_delay() {
        let ctx = context_at(ymd(2024, 3, 1));
        let sales = department(&ctx, "Ventes", false, true, 20).await;
        let support = department(&ctx, "Support", false, true, 5).await;

        // Hired 10 years before 2024-03-21
        let hire = employee("Hugo", ymd(1991, 7, 7), ymd(2014, 3, 21));
        // Turns 40 on 2024-03-21
        let birth = employee("Bea", ymd(1984, 3, 21), ymd(2020, 8, 1));
        // Turns 39, no milestone
        let none = employee("Nina", ymd(1985, 3, 21), ymd(2020, 8, 1));
        ctx.repos
            .employees
            .insert(&hire, &[sales.id.clone(), support.id.clone()])
            .await
            .unwrap();
        ctx.repos
            .employees
            .insert(&birth, &[sales.id.clone()])
            .await
            .unwrap();
        ctx.repos
            .employees
            .insert(&none, &[sales.id.clone()])
            .await
            .unwrap();

        let anniversaries = GetSpecialAnniversariesUseCase {}
            .execute(&ctx)
            .await
            .unwrap();
        let summary = anniversaries
            .iter()
            .map(|a| {
                (
                    a.employee.first_name.as_str(),
                    a.department.name.as_str(),
                    a.event.kind,
                    a.event.years,
                )
            })
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                ("Bea", "Ventes", AnniversaryKind::MilestoneBirthday, 40),
                (
                    "Hugo",
                    "Ventes",
                    AnniversaryKind::MilestoneHireAnniversary,
                    10
                ),
            ]
        );
        assert_eq!(anniversaries[0].manager.last_name, "Ventes");
        assert_eq!(anniversaries[0].notification_delay, 20);
    }
}
