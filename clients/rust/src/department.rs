use crate::base::{APIResponse, BaseClient};
use birthdays_api_structs::*;
use birthdays_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct DepartmentClient {
    base: Arc<BaseClient>,
}

pub type DepartmentInput = DepartmentRequestBody;

impl DepartmentClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self) -> APIResponse<get_departments::APIResponse> {
        self.base.get("departments".into(), StatusCode::OK).await
    }

    pub async fn create(
        &self,
        input: DepartmentInput,
    ) -> APIResponse<create_department::APIResponse> {
        self.base
            .post(input, "departments".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(
        &self,
        department_id: &ID,
        input: DepartmentInput,
    ) -> APIResponse<update_department::APIResponse> {
        self.base
            .put(input, format!("departments/{}", department_id), StatusCode::OK)
            .await
    }

    pub async fn delete(
        &self,
        department_id: &ID,
    ) -> APIResponse<delete_department::APIResponse> {
        self.base
            .delete(format!("departments/{}", department_id), StatusCode::OK)
            .await
    }
}
