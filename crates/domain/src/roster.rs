use crate::{Communication, Department, Employee};

/// One flattened `Employee` x `Department` row, the way storage returns the roster.
///
/// `membership` is `None` when the department side of the join is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    pub employee: Employee,
    pub membership: Option<MembershipDetails>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MembershipDetails {
    pub department: Department,
    pub communication: Communication,
    pub manager: Employee,
}
