use super::{validate_department, DepartmentDetails, InvalidDepartment, DEPARTMENT_NAME_MISSING};
use crate::{
    error::BirthdaysError,
    shared::{
        auth::protect_route,
        guard::Guard,
        unique_ids,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use birthdays_api_structs::create_department::*;
use birthdays_domain::{Department, ID};
use birthdays_infra::BirthdaysContext;

const ADD_SUCCESS: &str = "Le département a été ajouté avec succès";

pub async fn create_department_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;
    Guard::against_blank(&body.name, DEPARTMENT_NAME_MISSING)?;

    let body = body.0;
    let usecase = CreateDepartmentUseCase {
        name: body.name.trim().to_string(),
        notify_by_sms: body.notify_by_sms,
        notify_by_mail: body.notify_by_mail,
        manager_id: body.manager.pk_employee,
        communication_id: body.communication.pk_communication,
        employee_ids: unique_ids(body.employees.into_iter().map(|e| e.pk_employee)),
    };

    execute(usecase, &ctx)
        .await
        .map(|details| {
            HttpResponse::Created().json(APIResponse::success(ADD_SUCCESS, details.into_dto()))
        })
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct CreateDepartmentUseCase {
    name: String,
    notify_by_sms: bool,
    notify_by_mail: bool,
    manager_id: ID,
    communication_id: ID,
    employee_ids: Vec<ID>,
}

#[derive(Debug)]
enum UseCaseError {
    Invalid(InvalidDepartment),
    Storage,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Invalid(e) => e.into(),
            UseCaseError::Storage => {
                Self::InternalError("Le département n'a pas pu être ajouté".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateDepartmentUseCase {
    type Response = DepartmentDetails;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateDepartment";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        let department = Department::new(
            self.name.clone(),
            self.notify_by_sms,
            self.notify_by_mail,
            self.manager_id.clone(),
            self.communication_id.clone(),
        );
        let details = validate_department(department, &self.employee_ids, ctx)
            .await
            .map_err(UseCaseError::Invalid)?;

        ctx.repos
            .departments
            .insert(&details.department, &self.employee_ids)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(details)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::department::test_helpers::{insert_communication, insert_employee};

    fn usecase(
        name: &str,
        manager_id: ID,
        communication_id: ID,
        employee_ids: Vec<ID>,
    ) -> CreateDepartmentUseCase {
        CreateDepartmentUseCase {
            name: name.into(),
            notify_by_sms: true,
            notify_by_mail: false,
            manager_id,
            communication_id,
            employee_ids,
        }
    }

    #[actix_web::test]
    async fn it_creates_department_with_members() {
        let ctx = BirthdaysContext::create_inmemory();
        let communication = insert_communication(&ctx).await;
        let zoe = insert_employee(&ctx, "Zoe").await;
        let anna = insert_employee(&ctx, "Anna").await;

        let details = usecase(
            "Ventes",
            zoe.id.clone(),
            communication.id.clone(),
            vec![zoe.id.clone(), anna.id.clone()],
        )
        .execute(&ctx)
        .await
        .unwrap();
        assert_eq!(details.manager.id, zoe.id);
        assert_eq!(details.employees.len(), 2);
        assert_eq!(details.employees[0].id, anna.id);

        let stored = ctx
            .repos
            .departments
            .find(&details.department.id)
            .await
            .unwrap();
        assert_eq!(stored.name, "Ventes");
        let members = ctx
            .repos
            .departments
            .find_memberships()
            .await
            .unwrap()
            .into_iter()
            .filter(|m| m.department_id == stored.id)
            .count();
        assert_eq!(members, 2);
    }

    #[actix_web::test]
    async fn it_rejects_duplicated_name() {
        let ctx = BirthdaysContext::create_inmemory();
        let communication = insert_communication(&ctx).await;
        let zoe = insert_employee(&ctx, "Zoe").await;

        usecase("Ventes", zoe.id.clone(), communication.id.clone(), vec![])
            .execute(&ctx)
            .await
            .unwrap();
        assert!(matches!(
            usecase("Ventes", zoe.id.clone(), communication.id.clone(), vec![])
                .execute(&ctx)
                .await,
            Err(UseCaseError::Invalid(InvalidDepartment::AlreadyExists))
        ));
    }

    #[actix_web::test]
    async fn it_rejects_unknown_references() {
        let ctx = BirthdaysContext::create_inmemory();
        let communication = insert_communication(&ctx).await;
        let zoe = insert_employee(&ctx, "Zoe").await;

        assert!(matches!(
            usecase("Ventes", ID::default(), communication.id.clone(), vec![])
                .execute(&ctx)
                .await,
            Err(UseCaseError::Invalid(InvalidDepartment::EmployeeNotFound(_)))
        ));
        assert!(matches!(
            usecase("Ventes", zoe.id.clone(), ID::default(), vec![])
                .execute(&ctx)
                .await,
            Err(UseCaseError::Invalid(InvalidDepartment::CommunicationNotFound(_)))
        ));
        assert!(matches!(
            usecase(
                "Ventes",
                zoe.id.clone(),
                communication.id.clone(),
                vec![ID::default()]
            )
            .execute(&ctx)
            .await,
            Err(UseCaseError::Invalid(InvalidDepartment::EmployeeNotFound(_)))
        ));
        assert!(ctx.repos.departments.find_all().await.unwrap().is_empty());
    }
}
