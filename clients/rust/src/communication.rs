use crate::base::{APIResponse, BaseClient};
use birthdays_api_structs::*;
use birthdays_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CommunicationClient {
    base: Arc<BaseClient>,
}

pub type CommunicationInput = CommunicationRequestBody;

impl CommunicationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self) -> APIResponse<get_communications::APIResponse> {
        self.base.get("communications".into(), StatusCode::OK).await
    }

    pub async fn create(
        &self,
        input: CommunicationInput,
    ) -> APIResponse<create_communication::APIResponse> {
        self.base
            .post(input, "communications".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(
        &self,
        communication_id: &ID,
        input: CommunicationInput,
    ) -> APIResponse<update_communication::APIResponse> {
        self.base
            .put(
                input,
                format!("communications/{}", communication_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(
        &self,
        communication_id: &ID,
    ) -> APIResponse<delete_communication::APIResponse> {
        self.base
            .delete(
                format!("communications/{}", communication_id),
                StatusCode::OK,
            )
            .await
    }
}
