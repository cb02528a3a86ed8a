use birthdays_domain::{Communication, Department, Employee, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DepartmentEmployeeDTO {
    pub pk_employee: ID,
    pub first_name: String,
    pub last_name: String,
}

impl DepartmentEmployeeDTO {
    pub fn new(employee: Employee) -> Self {
        Self {
            pk_employee: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DepartmentCommunicationDTO {
    pub pk_communication: ID,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DepartmentDTO {
    pub pk_department: ID,
    pub name: String,
    pub notify_by_sms: bool,
    pub notify_by_mail: bool,
    pub manager: DepartmentEmployeeDTO,
    pub communication: DepartmentCommunicationDTO,
    pub employees: Vec<DepartmentEmployeeDTO>,
}

impl DepartmentDTO {
    pub fn new(
        department: Department,
        manager: Employee,
        communication: Communication,
        employees: Vec<Employee>,
    ) -> Self {
        Self {
            pk_department: department.id,
            name: department.name,
            notify_by_sms: department.notify_by_sms,
            notify_by_mail: department.notify_by_mail,
            manager: DepartmentEmployeeDTO::new(manager),
            communication: DepartmentCommunicationDTO {
                pk_communication: communication.id,
                description: communication.description,
            },
            employees: employees
                .into_iter()
                .map(DepartmentEmployeeDTO::new)
                .collect(),
        }
    }
}

/// Reference to an existing `Department` in request bodies
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DepartmentKey {
    pub pk_department: ID,
}
