use crate::{
    birthday::{
        get_special_anniversaries::GetSpecialAnniversariesUseCase,
        get_todays_birthdays::GetTodaysBirthdaysUseCase,
    },
    shared::usecase::execute,
};
use actix_web::rt::time::sleep;
use birthdays_domain::notification::{
    birthday_wish_mail, birthday_wish_sms, manager_reminder_mail,
};
use birthdays_infra::BirthdaysContext;
use chrono::{Duration as ChronoDuration, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::time::Duration;
use tracing::{error, info};

/// Seconds from `now_ts` (millis) until the next `hour`:00 in `tz`
pub fn get_start_delay(now_ts: i64, tz: &Tz, hour: u32) -> u64 {
    let now = match Utc.timestamp_millis_opt(now_ts).single() {
        Some(now) => now.with_timezone(tz),
        None => return 24 * 60 * 60,
    };
    let at = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN);

    let mut day = now.date_naive();
    loop {
        // A local time skipped by a DST change runs one hour later
        let local = day.and_time(at);
        let next = tz
            .from_local_datetime(&local)
            .earliest()
            .or_else(|| tz.from_local_datetime(&(local + ChronoDuration::hours(1))).earliest());
        if let Some(next) = next {
            if next > now {
                return (next - now).num_seconds().max(0) as u64;
            }
        }
        day = match day.succ_opt() {
            Some(day) => day,
            None => return 24 * 60 * 60,
        };
    }
}

async fn sleep_until_next_run(ctx: &BirthdaysContext) {
    let secs = get_start_delay(
        ctx.sys.get_timestamp_millis(),
        &ctx.config.timezone,
        ctx.config.daily_jobs_hour,
    );
    sleep(Duration::from_secs(secs)).await;
}

pub fn start_birthday_wishes_job(ctx: BirthdaysContext) {
    actix_web::rt::spawn(async move {
        loop {
            sleep_until_next_run(&ctx).await;
            send_birthday_wishes(&ctx).await;
        }
    });
}

pub fn start_manager_reminders_job(ctx: BirthdaysContext) {
    actix_web::rt::spawn(async move {
        loop {
            sleep_until_next_run(&ctx).await;
            send_manager_reminders(&ctx).await;
        }
    });
}

#[derive(Debug, Default, PartialEq)]
pub struct JobReport {
    pub sent: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Wishes a happy birthday to every employee born today, once per department and
/// enabled channel. `None` when today's birthdays could not be fetched.
pub async fn send_birthday_wishes(ctx: &BirthdaysContext) -> Option<JobReport> {
    info!("Birthday wishes job started");
    let birthdays = match execute(GetTodaysBirthdaysUseCase {}, ctx).await {
        Ok(birthdays) => birthdays,
        Err(e) => {
            error!("Birthday wishes job aborted: {:?}", e);
            return None;
        }
    };
    let mut report = JobReport::default();
    if birthdays.is_empty() {
        info!("No birthday today, nothing to send");
        return Some(report);
    }
    info!("Found {} birthday(s) today", birthdays.len());

    for birthday in &birthdays {
        let employee = &birthday.employee;
        for department in &birthday.departments {
            match birthday_wish_mail(employee, department) {
                Some(mail) => match ctx.notifier.send_mail(&mail).await {
                    Ok(_) => {
                        info!("Birthday mail sent to {}", mail.to);
                        report.sent += 1;
                    }
                    Err(e) => {
                        error!("Unable to send birthday mail to {}: {:?}", mail.to, e);
                        report.failed += 1;
                    }
                },
                None => {
                    info!(
                        "Department {} does not notify by mail, skipping {}",
                        department.name,
                        employee.full_name()
                    );
                    report.skipped += 1;
                }
            }

            match birthday_wish_sms(employee, department) {
                Some(sms) => match ctx.notifier.send_sms(&sms).await {
                    Ok(_) => {
                        info!("Birthday SMS sent to {}", sms.to);
                        report.sent += 1;
                    }
                    Err(e) => {
                        error!("Unable to send birthday SMS to {}: {:?}", sms.to, e);
                        report.failed += 1;
                    }
                },
                None => {
                    info!(
                        "Department {} does not notify by SMS, skipping {}",
                        department.name,
                        employee.full_name()
                    );
                    report.skipped += 1;
                }
            }
        }
    }

    info!("Birthday wishes job done: {:?}", report);
    Some(report)
}

/// Reminds department managers of upcoming milestone anniversaries.
/// `None` when the anniversaries could not be fetched.
pub async fn send_manager_reminders(ctx: &BirthdaysContext) -> Option<JobReport> {
    info!("Manager reminders job started");
    let anniversaries = match execute(GetSpecialAnniversariesUseCase {}, ctx).await {
        Ok(anniversaries) => anniversaries,
        Err(e) => {
            error!("Manager reminders job aborted: {:?}", e);
            return None;
        }
    };
    let mut report = JobReport::default();
    if anniversaries.is_empty() {
        info!("No upcoming special anniversary, nothing to send");
        return Some(report);
    }
    info!("Found {} upcoming special anniversary(ies)", anniversaries.len());

    for anniversary in &anniversaries {
        let mail = manager_reminder_mail(anniversary);
        match ctx.notifier.send_mail(&mail).await {
            Ok(_) => {
                info!(
                    "Reminder about {} sent to {}",
                    anniversary.employee.full_name(),
                    mail.to
                );
                report.sent += 1;
            }
            Err(e) => {
                error!("Unable to send reminder to {}: {:?}", mail.to, e);
                report.failed += 1;
            }
        }
    }

    info!("Manager reminders job done: {:?}", report);
    Some(report)
}
