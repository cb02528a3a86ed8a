use crate::base::{APIResponse, BaseClient};
use birthdays_api_structs::*;
use birthdays_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct EmployeeClient {
    base: Arc<BaseClient>,
}

pub type EmployeeInput = EmployeeRequestBody;

impl EmployeeClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self) -> APIResponse<get_employees::APIResponse> {
        self.base.get("employees".into(), StatusCode::OK).await
    }

    pub async fn create(&self, input: EmployeeInput) -> APIResponse<create_employee::APIResponse> {
        self.base
            .post(input, "employees".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(
        &self,
        employee_id: &ID,
        input: EmployeeInput,
    ) -> APIResponse<update_employee::APIResponse> {
        self.base
            .put(input, format!("employees/{}", employee_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, employee_id: &ID) -> APIResponse<delete_employee::APIResponse> {
        self.base
            .delete(format!("employees/{}", employee_id), StatusCode::OK)
            .await
    }
}
