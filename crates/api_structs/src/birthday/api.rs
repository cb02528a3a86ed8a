use crate::dtos::{
    AdminMonthAnniversaryDTO, MonthAnniversaryDTO, SpecialAnniversaryDTO, TodaysBirthdayDTO,
};
use crate::Envelope;

pub mod get_todays_birthdays {
    use super::*;

    pub type APIResponse = Envelope<Vec<TodaysBirthdayDTO>>;
}

pub mod get_months_anniversaries {
    use super::*;

    pub type APIResponse = Envelope<Vec<MonthAnniversaryDTO>>;
}

pub mod get_admin_months_anniversaries {
    use super::*;

    pub type APIResponse = Envelope<Vec<AdminMonthAnniversaryDTO>>;
}

pub mod get_special_anniversaries {
    use super::*;

    pub type APIResponse = Envelope<Vec<SpecialAnniversaryDTO>>;
}
