use birthdays_api::Application;
use birthdays_domain::NaiveDate;
use birthdays_infra::{seed_admin, AdminSeed, BirthdaysContext, StaticTimeSys};
use birthdays_sdk::BirthdaysSDK;
use chrono::{TimeZone, Utc};
use std::sync::Arc;

pub const ADMIN_MAIL: &str = "rh@entreprise.ch";
pub const ADMIN_PASSWORD: &str = "motdepasse";

pub struct TestApp {
    pub ctx: BirthdaysContext,
    pub address: String,
}

impl TestApp {
    /// SDK authenticated as the seeded admin
    pub async fn admin_sdk(&self) -> BirthdaysSDK {
        let res = BirthdaysSDK::new(self.address.clone())
            .auth
            .login(ADMIN_MAIL, ADMIN_PASSWORD)
            .await
            .expect("Expected admin to log in");
        let token = res.data.expect("Expected login data").token;
        BirthdaysSDK::with_token(self.address.clone(), token)
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, BirthdaysSDK, String) {
    spawn_with_context(BirthdaysContext::create_inmemory()).await
}

/// Launch the application with the clock frozen at noon UTC on `today`
pub async fn spawn_app_at(today: NaiveDate) -> (TestApp, BirthdaysSDK, String) {
    let mut ctx = BirthdaysContext::create_inmemory();
    let noon = today.and_hms_opt(12, 0, 0).unwrap();
    ctx.sys = Arc::new(StaticTimeSys {
        timestamp_millis: Utc.from_utc_datetime(&noon).timestamp_millis(),
    });
    spawn_with_context(ctx).await
}

async fn spawn_with_context(mut ctx: BirthdaysContext) -> (TestApp, BirthdaysSDK, String) {
    ctx.config.port = 0; // Random port
    ctx.config.enable_job_schedulers = false;
    ctx.config.timezone = chrono_tz::Europe::Zurich;
    ctx.config.admin_view_window_days = 180;
    seed_admin(
        &ctx,
        &AdminSeed {
            mail: ADMIN_MAIL.into(),
            password: ADMIN_PASSWORD.into(),
        },
    )
    .await
    .expect("Expected to seed admin");

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        ctx,
        address: address.clone(),
    };
    let sdk = BirthdaysSDK::new(address.clone());
    (app, sdk, address)
}
