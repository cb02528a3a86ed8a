use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
    pub mail: String,
    pub tel_number: String,
    pub date_of_birth: NaiveDate,
    pub date_of_hire: NaiveDate,
}

impl Employee {
    pub fn new(
        first_name: String,
        last_name: String,
        mail: String,
        tel_number: String,
        date_of_birth: NaiveDate,
        date_of_hire: NaiveDate,
    ) -> Self {
        Self {
            id: Default::default(),
            first_name,
            last_name,
            mail,
            tel_number,
            date_of_birth,
            date_of_hire,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// An `Employee` cannot be hired before being born
    pub fn has_valid_dates(&self) -> bool {
        self.date_of_hire >= self.date_of_birth
    }

    /// Whether the mail or phone number is already used by `other`
    pub fn conflicts_with(&self, other: &Employee) -> bool {
        self.id != other.id && (self.mail == other.mail || self.tel_number == other.tel_number)
    }
}

impl Entity<ID> for Employee {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
