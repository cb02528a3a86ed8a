mod auth;
mod base;
mod birthday;
mod communication;
mod department;
mod employee;
mod status;

use auth::AuthClient;
pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use birthday::BirthdayClient;
use communication::CommunicationClient;
pub use communication::CommunicationInput;
use department::DepartmentClient;
pub use department::DepartmentInput;
use employee::EmployeeClient;
pub use employee::EmployeeInput;
use status::StatusClient;
use std::sync::Arc;

pub use birthdays_api_structs::dtos::*;
pub use birthdays_api_structs::login::LoginDTO;
pub use birthdays_api_structs::Envelope;
pub use birthdays_domain::{AnniversaryKind, NaiveDate, ID};
pub use reqwest::StatusCode;

/// Birthdays Server SDK
///
/// The SDK contains methods for interacting with the birthdays server API.
/// Routes other than the public ones need a token obtained with `auth.login`.
#[derive(Clone)]
pub struct BirthdaysSDK {
    pub auth: AuthClient,
    pub birthday: BirthdayClient,
    pub communication: CommunicationClient,
    pub department: DepartmentClient,
    pub employee: EmployeeClient,
    pub status: StatusClient,
}

impl BirthdaysSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        Self::from_base(BaseClient::new(address.into()))
    }

    /// SDK sending the token as `Authorization: Bearer <token>`
    pub fn with_token<T: Into<String>>(address: T, token: T) -> Self {
        let mut base = BaseClient::new(address.into());
        base.set_token(token.into());
        Self::from_base(base)
    }

    fn from_base(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let auth = AuthClient::new(base.clone());
        let birthday = BirthdayClient::new(base.clone());
        let communication = CommunicationClient::new(base.clone());
        let department = DepartmentClient::new(base.clone());
        let employee = EmployeeClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            auth,
            birthday,
            communication,
            department,
            employee,
            status,
        }
    }
}
