use crate::{
    aggregate::aggregate,
    anniversary::{
        is_birthday_today, is_milestone_birthday, is_milestone_hire_anniversary,
        next_occurrence_within_window, window_end, AnniversaryEvent,
    },
    date::{month_day_key, shift_to_year},
    roster::RosterRow,
    Department, Employee,
};
use chrono::{Datelike, NaiveDate};

/// Department data needed to wish an `Employee` a happy birthday
#[derive(Debug, Clone, PartialEq)]
pub struct BirthdayDepartment {
    pub name: String,
    pub notify_by_sms: bool,
    pub notify_by_mail: bool,
    pub birthday_msg: String,
    pub html_birthday_msg: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodaysBirthday {
    pub employee: Employee,
    pub departments: Vec<BirthdayDepartment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthAnniversary {
    pub employee: Employee,
    /// Date of birth or date of hire, depending on `event.kind`
    pub date: NaiveDate,
    /// `date` moved into the reference year
    pub occurrence: NaiveDate,
    pub event: AnniversaryEvent,
}

/// Upcoming milestone anniversary a department manager should be reminded of
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialAnniversary {
    pub employee: Employee,
    pub department: Department,
    pub manager: Employee,
    pub notification_delay: i32,
    pub event: AnniversaryEvent,
}

/// Stable sort on `month * 100 + day`, ignoring the year
pub fn sort_by_month_day<T, F>(items: &mut [T], date: F)
where
    F: Fn(&T) -> NaiveDate,
{
    items.sort_by_key(|item| month_day_key(date(item)));
}

/// Employees born on the reference day, one record per employee with all of its departments
pub fn todays_birthdays(reference: NaiveDate, rows: Vec<RosterRow>) -> Vec<TodaysBirthday> {
    let rows = rows
        .into_iter()
        .filter(|row| is_birthday_today(reference, row.employee.date_of_birth));

    aggregate(
        rows,
        |row| row.employee.id.clone(),
        |row| {
            let department = row.membership.map(|m| BirthdayDepartment {
                name: m.department.name,
                notify_by_sms: m.department.notify_by_sms,
                notify_by_mail: m.department.notify_by_mail,
                birthday_msg: m.communication.birthday_msg,
                html_birthday_msg: m.communication.html_birthday_msg,
            });
            (row.employee, department)
        },
    )
    .into_iter()
    .map(|group| TodaysBirthday {
        employee: group.parent,
        departments: group.children,
    })
    .collect()
}

/// Birthdays and milestone work anniversaries falling in the reference month.
///
/// Birth rows come first, then hire rows, before the stable month/day sort.
pub fn months_anniversaries(
    reference: NaiveDate,
    employees: &[Employee],
) -> Vec<MonthAnniversary> {
    let births = employees
        .iter()
        .filter(|e| e.date_of_birth.month() == reference.month())
        .map(|e| MonthAnniversary {
            employee: e.clone(),
            date: e.date_of_birth,
            occurrence: shift_to_year(e.date_of_birth, reference.year()),
            event: AnniversaryEvent::birthday(reference, e.date_of_birth),
        });

    let hires = employees
        .iter()
        .filter(|e| e.date_of_hire.month() == reference.month())
        .filter_map(|e| {
            AnniversaryEvent::hire_milestone(reference, e.date_of_hire).map(|event| {
                MonthAnniversary {
                    employee: e.clone(),
                    date: e.date_of_hire,
                    occurrence: shift_to_year(e.date_of_hire, reference.year()),
                    event,
                }
            })
        });

    let mut anniversaries = births.chain(hires).collect::<Vec<_>>();
    sort_by_month_day(&mut anniversaries, |a| a.date);
    anniversaries
}

/// Birthdays and milestone work anniversaries whose occurrence in the reference year lies in
/// `[reference, reference + window_days]`.
///
/// Only the reference year's occurrence is considered, so near the end of the year this view
/// does not look into January.
pub fn admin_months_anniversaries(
    reference: NaiveDate,
    employees: &[Employee],
    window_days: u32,
) -> Vec<MonthAnniversary> {
    let last_day = window_end(reference, window_days);
    let in_window = |occurrence: &NaiveDate| *occurrence >= reference && *occurrence <= last_day;

    let births = employees.iter().filter_map(|e| {
        let occurrence = shift_to_year(e.date_of_birth, reference.year());
        if !in_window(&occurrence) {
            return None;
        }
        Some(MonthAnniversary {
            employee: e.clone(),
            date: e.date_of_birth,
            occurrence,
            event: AnniversaryEvent::birthday(reference, e.date_of_birth),
        })
    });

    let hires = employees.iter().filter_map(|e| {
        let occurrence = shift_to_year(e.date_of_hire, reference.year());
        if !in_window(&occurrence) {
            return None;
        }
        AnniversaryEvent::hire_milestone(reference, e.date_of_hire).map(|event| MonthAnniversary {
            employee: e.clone(),
            date: e.date_of_hire,
            occurrence,
            event,
        })
    });

    let mut anniversaries = births.chain(hires).collect::<Vec<_>>();
    sort_by_month_day(&mut anniversaries, |a| a.occurrence);
    anniversaries
}

/// Milestone anniversaries landing exactly `notification_delay` days after the reference day,
/// one row per (employee, department). A birth milestone wins over a hire milestone on the
/// same day.
pub fn special_anniversaries(
    reference: NaiveDate,
    rows: Vec<RosterRow>,
) -> Vec<SpecialAnniversary> {
    rows.into_iter()
        .filter_map(|row| {
            let membership = row.membership?;
            let delay = membership.communication.notification_delay.max(0) as u32;
            let target = window_end(reference, delay);
            let employee = row.employee;

            let event = if next_occurrence_within_window(reference, employee.date_of_birth, delay)
                && is_milestone_birthday(target, employee.date_of_birth)
            {
                AnniversaryEvent::birthday(target, employee.date_of_birth)
            } else if next_occurrence_within_window(reference, employee.date_of_hire, delay)
                && is_milestone_hire_anniversary(target, employee.date_of_hire)
            {
                AnniversaryEvent::hire_milestone(target, employee.date_of_hire)?
            } else {
                return None;
            };

            Some(SpecialAnniversary {
                employee,
                department: membership.department,
                manager: membership.manager,
                notification_delay: membership.communication.notification_delay,
                event,
            })
        })
        .collect()
}
