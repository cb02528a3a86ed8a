use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: ID,
    pub name: String,
    pub notify_by_sms: bool,
    pub notify_by_mail: bool,
    pub manager_id: ID,
    pub communication_id: ID,
}

impl Department {
    pub fn new(
        name: String,
        notify_by_sms: bool,
        notify_by_mail: bool,
        manager_id: ID,
        communication_id: ID,
    ) -> Self {
        Self {
            id: Default::default(),
            name,
            notify_by_sms,
            notify_by_mail,
            manager_id,
            communication_id,
        }
    }
}

impl Entity<ID> for Department {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// Join between a `Department` and one of its member `Employee`s
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub department_id: ID,
    pub employee_id: ID,
}
