use birthdays_utils::create_random_secret;
use chrono_tz::Tz;
use tracing::{info, warn};

/// Admin account created at start-up when it does not exist yet
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub mail: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Secret used to sign and verify the admin json web tokens (HS256)
    pub jwt_secret: String,
    /// Lifetime of an issued token in seconds
    pub jwt_expires_in_secs: i64,
    /// Timezone deciding what "today" is for every birthday view
    pub timezone: Tz,
    /// How many days ahead the admin view of the anniversaries looks
    pub admin_view_window_days: u32,
    /// Local hour at which the daily wish and reminder jobs run
    pub daily_jobs_hour: u32,
    pub enable_job_schedulers: bool,
    pub admin_seed: Option<AdminSeed>,
}

const DEFAULT_PORT: usize = 5000;
const DEFAULT_JWT_EXPIRES_IN_SECS: i64 = 60 * 60;
const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Zurich;
const DEFAULT_ADMIN_VIEW_WINDOW_DAYS: u32 = 180;
const DEFAULT_DAILY_JOBS_HOUR: u32 = 8;

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the `Config` from any key lookup. Invalid values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                info!("Did not find JWT_SECRET environment variable. Going to create one.");
                create_random_secret(32)
            }
        };

        let admin_seed = match (lookup("ADMIN_MAIL"), lookup("ADMIN_PASSWORD")) {
            (Some(mail), Some(password)) if !mail.is_empty() && !password.is_empty() => {
                Some(AdminSeed { mail, password })
            }
            _ => None,
        };

        let daily_jobs_hour = parse_or_default(&lookup, "DAILY_JOBS_HOUR", DEFAULT_DAILY_JOBS_HOUR);
        let daily_jobs_hour = if daily_jobs_hour > 23 {
            warn!(
                "The given DAILY_JOBS_HOUR: {} is not a valid hour, falling back to the default: {}.",
                daily_jobs_hour, DEFAULT_DAILY_JOBS_HOUR
            );
            DEFAULT_DAILY_JOBS_HOUR
        } else {
            daily_jobs_hour
        };

        Self {
            port: parse_or_default(&lookup, "PORT", DEFAULT_PORT),
            jwt_secret,
            jwt_expires_in_secs: parse_or_default(
                &lookup,
                "JWT_EXPIRES_IN_SECS",
                DEFAULT_JWT_EXPIRES_IN_SECS,
            ),
            timezone: parse_or_default(&lookup, "BUSINESS_TIMEZONE", DEFAULT_TIMEZONE),
            admin_view_window_days: parse_or_default(
                &lookup,
                "ADMIN_VIEW_WINDOW_DAYS",
                DEFAULT_ADMIN_VIEW_WINDOW_DAYS,
            ),
            daily_jobs_hour,
            enable_job_schedulers: parse_or_default(&lookup, "ENABLE_JOB_SCHEDULERS", true),
            admin_seed,
        }
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(value) => match value.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, value, default
                );
                default
            }
        },
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
