use birthdays_domain::{Admin, Communication, Department, Employee, Membership};
use std::sync::Mutex;

/// Tables shared by all the inmemory repositories, so that joins and
/// cross table checks see the same data
#[derive(Default)]
pub struct InMemoryDatabase {
    pub employees: Mutex<Vec<Employee>>,
    pub departments: Mutex<Vec<Department>>,
    pub communications: Mutex<Vec<Communication>>,
    pub memberships: Mutex<Vec<Membership>>,
    pub admins: Mutex<Vec<Admin>>,
}
