use birthdays_domain::date::format_day_month;
use birthdays_domain::views::{
    BirthdayDepartment, MonthAnniversary, SpecialAnniversary, TodaysBirthday,
};
use birthdays_domain::{AnniversaryKind, NaiveDate, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BirthdayDepartmentDTO {
    pub name: String,
    pub notify_by_sms: bool,
    pub notify_by_mail: bool,
    pub birthday_msg: String,
    pub html_birthday_msg: String,
}

impl BirthdayDepartmentDTO {
    pub fn new(department: BirthdayDepartment) -> Self {
        Self {
            name: department.name,
            notify_by_sms: department.notify_by_sms,
            notify_by_mail: department.notify_by_mail,
            birthday_msg: department.birthday_msg,
            html_birthday_msg: department.html_birthday_msg,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TodaysBirthdayDTO {
    pub pk_employee: ID,
    pub first_name: String,
    pub last_name: String,
    pub mail: String,
    pub tel_number: String,
    pub date_of_birth: NaiveDate,
    pub departments: Vec<BirthdayDepartmentDTO>,
}

impl TodaysBirthdayDTO {
    pub fn new(birthday: TodaysBirthday) -> Self {
        let e = birthday.employee;
        Self {
            pk_employee: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            mail: e.mail,
            tel_number: e.tel_number,
            date_of_birth: e.date_of_birth,
            departments: birthday
                .departments
                .into_iter()
                .map(BirthdayDepartmentDTO::new)
                .collect(),
        }
    }
}

/// Public listing entry, the year of the anniversary is not disclosed
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MonthAnniversaryDTO {
    pub pk_employee: ID,
    pub first_name: String,
    pub last_name: String,
    /// Formatted as `dd-mm`
    pub birthday_date: String,
    pub birthday_type: String,
}

impl MonthAnniversaryDTO {
    pub fn new(anniversary: MonthAnniversary) -> Self {
        Self {
            birthday_date: format_day_month(anniversary.date),
            birthday_type: anniversary.event.label().to_string(),
            pk_employee: anniversary.employee.id,
            first_name: anniversary.employee.first_name,
            last_name: anniversary.employee.last_name,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AdminMonthAnniversaryDTO {
    pub pk_employee: ID,
    pub first_name: String,
    pub last_name: String,
    pub mail: String,
    pub tel_number: String,
    /// Occurrence in the current year
    pub birthday_date: NaiveDate,
    pub birthday_type: String,
    pub kind: AnniversaryKind,
    pub years: i32,
}

impl AdminMonthAnniversaryDTO {
    pub fn new(anniversary: MonthAnniversary) -> Self {
        let e = anniversary.employee;
        Self {
            pk_employee: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            mail: e.mail,
            tel_number: e.tel_number,
            birthday_date: anniversary.occurrence,
            birthday_type: anniversary.event.label_with_years(),
            kind: anniversary.event.kind,
            years: anniversary.event.years,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SpecialAnniversaryDTO {
    pub pk_employee: ID,
    pub first_name: String,
    pub last_name: String,
    pub mail: String,
    pub tel_number: String,
    pub date_of_birth: NaiveDate,
    pub date_of_hire: NaiveDate,
    pub pk_department: ID,
    pub department_name: String,
    pub manager_first_name: String,
    pub manager_last_name: String,
    pub manager_mail: String,
    pub notification_delay: i32,
    pub birthday_type: String,
    pub kind: AnniversaryKind,
    pub years: i32,
}

impl SpecialAnniversaryDTO {
    pub fn new(anniversary: SpecialAnniversary) -> Self {
        let e = anniversary.employee;
        Self {
            pk_employee: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            mail: e.mail,
            tel_number: e.tel_number,
            date_of_birth: e.date_of_birth,
            date_of_hire: e.date_of_hire,
            pk_department: anniversary.department.id,
            department_name: anniversary.department.name,
            manager_first_name: anniversary.manager.first_name,
            manager_last_name: anniversary.manager.last_name,
            manager_mail: anniversary.manager.mail,
            notification_delay: anniversary.notification_delay,
            birthday_type: anniversary.event.label().to_string(),
            kind: anniversary.event.kind,
            years: anniversary.event.years,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use birthdays_domain::views::admin_months_anniversaries;
    use birthdays_domain::Employee;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee(first_name: &str, dob: NaiveDate, doh: NaiveDate) -> Employee {
        Employee::new(
            first_name.into(),
            "Favre".into(),
            format!("{}@entreprise.ch", first_name.to_lowercase()),
            format!("+41 79 {}", first_name),
            dob,
            doh,
        )
    }

    #[test]
    fn admin_month_dto_shows_upcoming_occurrence() {
        let bob = employee("Bob", ymd(1984, 3, 25), ymd(2020, 8, 1));
        let dtos = admin_months_anniversaries(ymd(2024, 3, 15), &[bob], 180)
            .into_iter()
            .map(AdminMonthAnniversaryDTO::new)
            .collect::<Vec<_>>();

        assert_eq!(dtos.len(), 1);
        assert_eq!(dtos[0].birthday_date, ymd(2024, 3, 25));
        assert_eq!(dtos[0].birthday_type, "Anniversaire important (40 ans)");
    }

    #[test]
    fn admin_month_dto_moves_leap_day_to_february_28th() {
        let lea = employee("Lea", ymd(1992, 2, 29), ymd(2021, 6, 1));
        let dtos = admin_months_anniversaries(ymd(2023, 2, 1), &[lea], 180)
            .into_iter()
            .map(AdminMonthAnniversaryDTO::new)
            .collect::<Vec<_>>();

        assert_eq!(dtos.len(), 1);
        assert_eq!(dtos[0].birthday_date, ymd(2023, 2, 28));
    }
}
