use super::{
    validate_department, DepartmentDetails, InvalidDepartment, DEPARTMENT_DOESNT_EXIST,
    DEPARTMENT_NAME_MISSING,
};
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
use birthdays_api_structs::update_department::*;
use birthdays_domain::ID;
use birthdays_infra::BirthdaysContext;

const UPDATE_SUCCESS: &str = "Le département a été modifié avec succès";

pub async fn update_department_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<BirthdaysContext>,
) -> Result<HttpResponse, BirthdaysError> {
    protect_route(&http_req, &ctx)?;
    Guard::against_blank(&body.name, DEPARTMENT_NAME_MISSING)?;

    let body = body.0;
    let usecase = UpdateDepartmentUseCase {
        department_id: path.pk_department.clone(),
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
            HttpResponse::Ok().json(APIResponse::success(UPDATE_SUCCESS, details.into_dto()))
        })
        .map_err(BirthdaysError::from)
}

#[derive(Debug)]
struct UpdateDepartmentUseCase {
    department_id: ID,
    name: String,
    notify_by_sms: bool,
    notify_by_mail: bool,
    manager_id: ID,
    communication_id: ID,
    employee_ids: Vec<ID>,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    Invalid(InvalidDepartment),
    /// Full name of the employee who would be left without department
    WouldOrphanEmployee(String),
    Storage,
}

impl From<UseCaseError> for BirthdaysError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(_) => Self::NotFound(DEPARTMENT_DOESNT_EXIST.into()),
            UseCaseError::Invalid(e) => e.into(),
            UseCaseError::WouldOrphanEmployee(name) => Self::Conflict(format!(
                "Le département ne peut pas être modifié car un employé ne serait plus dans aucun département : {}",
                name
            )),
            UseCaseError::Storage => {
                Self::InternalError("Le département n'a pas pu être modifié".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateDepartmentUseCase {
    type Response = DepartmentDetails;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateDepartment";

    async fn execute(&mut self, ctx: &BirthdaysContext) -> Result<Self::Response, Self::Error> {
        let mut department = match ctx.repos.departments.find(&self.department_id).await {
            Some(department) => department,
            None => return Err(UseCaseError::NotFound(self.department_id.clone())),
        };
        department.name = self.name.clone();
        department.notify_by_sms = self.notify_by_sms;
        department.notify_by_mail = self.notify_by_mail;
        department.manager_id = self.manager_id.clone();
        department.communication_id = self.communication_id.clone();

        let details = validate_department(department, &self.employee_ids, ctx)
            .await
            .map_err(UseCaseError::Invalid)?;

        // Every removed member must stay in at least one other department
        let memberships = ctx
            .repos
            .departments
            .find_memberships()
            .await
            .map_err(|_| UseCaseError::Storage)?;
        let removed = memberships
            .iter()
            .filter(|m| {
                m.department_id == self.department_id && !self.employee_ids.contains(&m.employee_id)
            })
            .map(|m| m.employee_id.clone())
            .collect::<Vec<_>>();
        for employee_id in removed {
            let has_other_department = memberships
                .iter()
                .any(|m| m.employee_id == employee_id && m.department_id != self.department_id);
            if !has_other_department {
                let name = match ctx.repos.employees.find(&employee_id).await {
                    Some(employee) => employee.full_name(),
                    None => employee_id.to_string(),
                };
                return Err(UseCaseError::WouldOrphanEmployee(name));
            }
        }

        ctx.repos
            .departments
            .save(&details.department, &self.employee_ids)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(details)
    }
}
