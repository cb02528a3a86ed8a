use crate::date::same_month_day;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Every 10th birthday is a milestone
pub const BIRTHDAY_MILESTONE_YEARS: i32 = 10;
/// Every 5th work anniversary is a milestone
pub const HIRE_MILESTONE_YEARS: i32 = 5;

/// Birthdays match on month and day. February 29th only matches February 29th.
pub fn is_birthday_today(reference: NaiveDate, date_of_birth: NaiveDate) -> bool {
    same_month_day(reference, date_of_birth)
}

pub fn is_hire_anniversary_today(reference: NaiveDate, date_of_hire: NaiveDate) -> bool {
    same_month_day(reference, date_of_hire)
}

/// Calendar year difference, not exact elapsed years
pub fn age_or_years_at_anniversary(reference: NaiveDate, original_date: NaiveDate) -> i32 {
    reference.year() - original_date.year()
}

pub fn is_milestone_birthday(reference: NaiveDate, date_of_birth: NaiveDate) -> bool {
    age_or_years_at_anniversary(reference, date_of_birth) % BIRTHDAY_MILESTONE_YEARS == 0
}

pub fn is_milestone_hire_anniversary(reference: NaiveDate, date_of_hire: NaiveDate) -> bool {
    age_or_years_at_anniversary(reference, date_of_hire) % HIRE_MILESTONE_YEARS == 0
}

/// `reference + window_days`, saturating at the end of the calendar
pub fn window_end(reference: NaiveDate, window_days: u32) -> NaiveDate {
    reference
        .checked_add_days(Days::new(window_days as u64))
        .unwrap_or(NaiveDate::MAX)
}

/// True iff the single day `reference + window_days` has the anniversary's month and day.
/// Days inside the window do not count.
pub fn next_occurrence_within_window(
    reference: NaiveDate,
    anniversary: NaiveDate,
    window_days: u32,
) -> bool {
    same_month_day(window_end(reference, window_days), anniversary)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnniversaryKind {
    BirthDateDaily,
    MilestoneBirthday,
    MilestoneHireAnniversary,
}

impl AnniversaryKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BirthDateDaily => "Anniversaire de naissance",
            Self::MilestoneBirthday => "Anniversaire important",
            Self::MilestoneHireAnniversary => "Anniversaire d'ancienneté",
        }
    }
}

/// Derived anniversary of an `Employee`, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnniversaryEvent {
    pub kind: AnniversaryKind,
    /// Age, or years since hire, in the year the anniversary is celebrated
    pub years: i32,
}

impl AnniversaryEvent {
    /// Birthday celebrated in the year of `reference`
    pub fn birthday(reference: NaiveDate, date_of_birth: NaiveDate) -> Self {
        let kind = if is_milestone_birthday(reference, date_of_birth) {
            AnniversaryKind::MilestoneBirthday
        } else {
            AnniversaryKind::BirthDateDaily
        };
        Self {
            kind,
            years: age_or_years_at_anniversary(reference, date_of_birth),
        }
    }

    /// Work anniversary celebrated in the year of `reference`, if it is a milestone
    pub fn hire_milestone(reference: NaiveDate, date_of_hire: NaiveDate) -> Option<Self> {
        if !is_milestone_hire_anniversary(reference, date_of_hire) {
            return None;
        }
        Some(Self {
            kind: AnniversaryKind::MilestoneHireAnniversary,
            years: age_or_years_at_anniversary(reference, date_of_hire),
        })
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// e.g. `Anniversaire important (40 ans)`
    pub fn label_with_years(&self) -> String {
        format!("{} ({} ans)", self.kind.label(), self.years)
    }
}
