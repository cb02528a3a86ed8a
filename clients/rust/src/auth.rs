use crate::base::{APIResponse, BaseClient};
use birthdays_api_structs::login;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthClient {
    base: Arc<BaseClient>,
}

impl AuthClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn login<T: Into<String>>(
        &self,
        mail: T,
        password: T,
    ) -> APIResponse<login::APIResponse> {
        let body = login::RequestBody {
            mail: mail.into(),
            password: password.into(),
        };
        self.base
            .post(body, "auth/login".into(), StatusCode::OK)
            .await
    }
}
