use birthdays_domain::{Communication, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CommunicationDTO {
    pub pk_communication: ID,
    pub description: String,
    pub birthday_msg: String,
    pub html_birthday_msg: String,
    pub notification_delay: i32,
}

impl CommunicationDTO {
    pub fn new(communication: Communication) -> Self {
        Self {
            pk_communication: communication.id,
            description: communication.description,
            birthday_msg: communication.birthday_msg,
            html_birthday_msg: communication.html_birthday_msg,
            notification_delay: communication.notification_delay,
        }
    }
}

/// Reference to an existing `Communication` in request bodies
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CommunicationKey {
    pub pk_communication: ID,
}
