use crate::dtos::{CommunicationKey, DepartmentDTO, EmployeeKey};
use crate::Envelope;
use birthdays_domain::ID;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DepartmentRequestBody {
    pub name: String,
    pub notify_by_sms: bool,
    pub notify_by_mail: bool,
    pub manager: EmployeeKey,
    pub communication: CommunicationKey,
    pub employees: Vec<EmployeeKey>,
}

pub mod get_departments {
    use super::*;

    pub type APIResponse = Envelope<Vec<DepartmentDTO>>;
}

pub mod create_department {
    use super::*;

    pub type RequestBody = DepartmentRequestBody;

    pub type APIResponse = Envelope<DepartmentDTO>;
}

pub mod update_department {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pk_department: ID,
    }

    pub type RequestBody = DepartmentRequestBody;

    pub type APIResponse = Envelope<DepartmentDTO>;
}

pub mod delete_department {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pk_department: ID,
    }

    pub type APIResponse = Envelope<()>;
}
