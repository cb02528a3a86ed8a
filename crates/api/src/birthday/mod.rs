mod get_admin_months_anniversaries;
mod get_months_anniversaries;
pub mod get_special_anniversaries;
pub mod get_todays_birthdays;

use actix_web::web;
use get_admin_months_anniversaries::get_admin_months_anniversaries_controller;
use get_months_anniversaries::get_months_anniversaries_controller;
use get_special_anniversaries::get_special_anniversaries_controller;
use get_todays_birthdays::get_todays_birthdays_controller;

const MONTH_SUCCESS: &str = "La liste des anniversaires du mois a été récupérée avec succès";
const MONTH_FAILURE: &str = "La liste des anniversaires du mois n'a pas pu être récupérée";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/birthdays/today",
        web::get().to(get_todays_birthdays_controller),
    );
    cfg.route(
        "/birthdays/month",
        web::get().to(get_months_anniversaries_controller),
    );
    cfg.route(
        "/birthdays/month/admin",
        web::get().to(get_admin_months_anniversaries_controller),
    );
    cfg.route(
        "/birthdays/special",
        web::get().to(get_special_anniversaries_controller),
    );
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use birthdays_domain::{Communication, Department, Employee, NaiveDate};
    use birthdays_infra::{BirthdaysContext, StaticTimeSys};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// In-memory context frozen at noon UTC on the given day
    pub fn context_at(today: NaiveDate) -> BirthdaysContext {
        let mut ctx = BirthdaysContext::create_inmemory();
        ctx.config.timezone = chrono_tz::Europe::Zurich;
        let noon = today.and_hms_opt(12, 0, 0).unwrap();
        ctx.sys = Arc::new(StaticTimeSys {
            timestamp_millis: Utc.from_utc_datetime(&noon).timestamp_millis(),
        });
        ctx
    }

    pub fn employee(first_name: &str, dob: NaiveDate, doh: NaiveDate) -> Employee {
        Employee::new(
            first_name.into(),
            "Rossi".into(),
            format!("{}@company.ch", first_name.to_lowercase()),
            format!("+41 {}", first_name),
            dob,
            doh,
        )
    }

    /// Inserts a department with its manager and communication
    pub async fn department(
        ctx: &BirthdaysContext,
        name: &str,
        notify_by_sms: bool,
        notify_by_mail: bool,
        notification_delay: i32,
    ) -> Department {
        let communication = Communication::new(
            format!("Communication {}", name),
            format!("Joyeux anniversaire de la part de {}", name),
            format!("<p>Joyeux anniversaire de la part de {}</p>", name),
            notification_delay,
        );
        ctx.repos.communications.insert(&communication).await.unwrap();
        let manager = Employee::new(
            "Chef".into(),
            name.into(),
            format!("chef@{}.ch", name.to_lowercase()),
            format!("+41 chef {}", name),
            ymd(1970, 1, 15),
            ymd(2001, 1, 15),
        );
        ctx.repos.employees.insert(&manager, &[]).await.unwrap();
        let department = Department::new(
            name.into(),
            notify_by_sms,
            notify_by_mail,
            manager.id.clone(),
            communication.id.clone(),
        );
        ctx.repos.departments.insert(&department, &[]).await.unwrap();
        department
    }
}
