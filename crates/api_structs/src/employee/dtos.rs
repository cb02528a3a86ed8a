use birthdays_domain::{Department, Employee, NaiveDate, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EmployeeDTO {
    pub pk_employee: ID,
    pub first_name: String,
    pub last_name: String,
    pub mail: String,
    pub tel_number: String,
    pub date_of_birth: NaiveDate,
    pub date_of_hire: NaiveDate,
}

impl EmployeeDTO {
    pub fn new(employee: Employee) -> Self {
        Self {
            pk_employee: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            mail: employee.mail,
            tel_number: employee.tel_number,
            date_of_birth: employee.date_of_birth,
            date_of_hire: employee.date_of_hire,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EmployeeDepartmentDTO {
    pub pk_department: ID,
    pub name: String,
}

impl EmployeeDepartmentDTO {
    pub fn new(department: Department) -> Self {
        Self {
            pk_department: department.id,
            name: department.name,
        }
    }
}

/// Roster entry: the employee with the departments it belongs to
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EmployeeWithDepartmentsDTO {
    #[serde(flatten)]
    pub employee: EmployeeDTO,
    pub departments: Vec<EmployeeDepartmentDTO>,
}

impl EmployeeWithDepartmentsDTO {
    pub fn new(employee: Employee, departments: Vec<Department>) -> Self {
        Self {
            employee: EmployeeDTO::new(employee),
            departments: departments
                .into_iter()
                .map(EmployeeDepartmentDTO::new)
                .collect(),
        }
    }
}

/// Reference to an existing `Employee` in request bodies
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EmployeeKey {
    pub pk_employee: ID,
}
