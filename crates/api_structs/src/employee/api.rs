use crate::dtos::{DepartmentKey, EmployeeWithDepartmentsDTO};
use crate::Envelope;
use birthdays_domain::{NaiveDate, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmployeeRequestBody {
    pub first_name: String,
    pub last_name: String,
    pub mail: String,
    pub tel_number: String,
    pub date_of_birth: NaiveDate,
    pub date_of_hire: NaiveDate,
    pub departments: Vec<DepartmentKey>,
}

pub mod get_employees {
    use super::*;

    pub type APIResponse = Envelope<Vec<EmployeeWithDepartmentsDTO>>;
}

pub mod create_employee {
    use super::*;

    pub type RequestBody = EmployeeRequestBody;

    pub type APIResponse = Envelope<EmployeeWithDepartmentsDTO>;
}

pub mod update_employee {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pk_employee: ID,
    }

    pub type RequestBody = EmployeeRequestBody;

    pub type APIResponse = Envelope<EmployeeWithDepartmentsDTO>;
}

pub mod delete_employee {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pk_employee: ID,
    }

    pub type APIResponse = Envelope<()>;
}
