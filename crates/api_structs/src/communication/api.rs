use crate::dtos::CommunicationDTO;
use crate::Envelope;
use birthdays_domain::ID;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommunicationRequestBody {
    pub description: String,
    pub birthday_msg: String,
    pub html_birthday_msg: String,
    pub notification_delay: i32,
}

pub mod get_communications {
    use super::*;

    pub type APIResponse = Envelope<Vec<CommunicationDTO>>;
}

pub mod create_communication {
    use super::*;

    pub type RequestBody = CommunicationRequestBody;

    pub type APIResponse = Envelope<CommunicationDTO>;
}

pub mod update_communication {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pk_communication: ID,
    }

    pub type RequestBody = CommunicationRequestBody;

    pub type APIResponse = Envelope<CommunicationDTO>;
}

pub mod delete_communication {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pk_communication: ID,
    }

    pub type APIResponse = Envelope<()>;
}
