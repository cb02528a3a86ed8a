use crate::base::{APIResponse, BaseClient};
use birthdays_api_structs::get_status;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct StatusClient {
    base: Arc<BaseClient>,
}

impl StatusClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn check_health(&self) -> APIResponse<get_status::APIResponse> {
        self.base.get("".into(), StatusCode::OK).await
    }
}
