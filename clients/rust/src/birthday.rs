use crate::base::{APIResponse, BaseClient};
use birthdays_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct BirthdayClient {
    base: Arc<BaseClient>,
}

impl BirthdayClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn today(&self) -> APIResponse<get_todays_birthdays::APIResponse> {
        self.base
            .get("birthdays/today".into(), StatusCode::OK)
            .await
    }

    pub async fn month(&self) -> APIResponse<get_months_anniversaries::APIResponse> {
        self.base
            .get("birthdays/month".into(), StatusCode::OK)
            .await
    }

    pub async fn month_admin(&self) -> APIResponse<get_admin_months_anniversaries::APIResponse> {
        self.base
            .get("birthdays/month/admin".into(), StatusCode::OK)
            .await
    }

    pub async fn special(&self) -> APIResponse<get_special_anniversaries::APIResponse> {
        self.base
            .get("birthdays/special".into(), StatusCode::OK)
            .await
    }
}
