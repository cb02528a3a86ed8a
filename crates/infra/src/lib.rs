mod config;
mod repos;
mod services;
mod system;

use birthdays_domain::{date::today_in, Admin, NaiveDate};
use birthdays_utils::hash_password;
pub use config::{AdminSeed, Config};
pub use repos::{
    IAdminRepo, ICommunicationRepo, IDepartmentRepo, IEmployeeRepo, IRosterRepo, Repos,
};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::{info, warn};

#[derive(Clone)]
pub struct BirthdaysContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
}

struct ContextParams {
    pub postgres_connection_string: Option<String>,
}

impl BirthdaysContext {
    async fn create(params: ContextParams) -> Self {
        let repos = match params.postgres_connection_string {
            Some(connection_string) => Repos::create_postgres(&connection_string)
                .await
                .expect("Postgres credentials must be set and valid"),
            None => {
                warn!("DATABASE_URL is not set, all data is kept in memory and lost on restart");
                Repos::create_inmemory()
            }
        };
        Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            notifier: Arc::new(LogNotifier {}),
        }
    }

    /// Context backed by inmemory repositories
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            notifier: Arc::new(LogNotifier {}),
        }
    }

    /// The current day in the business timezone
    pub fn today(&self) -> NaiveDate {
        today_in(&self.config.timezone, self.sys.get_timestamp_millis())
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> BirthdaysContext {
    let ctx = BirthdaysContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await;

    if let Some(seed) = &ctx.config.admin_seed {
        if let Err(e) = seed_admin(&ctx, seed).await {
            warn!("Unable to seed the admin account: {:?}", e);
        }
    }

    ctx
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING).ok()
}

/// Creates the admin account from the seed unless an admin with that mail exists
pub async fn seed_admin(ctx: &BirthdaysContext, seed: &AdminSeed) -> anyhow::Result<()> {
    if ctx.repos.admins.find_by_mail(&seed.mail).await.is_some() {
        info!("Admin account {} already exists", seed.mail);
        return Ok(());
    }

    let password_hash = hash_password(&seed.password).map_err(|e| anyhow::anyhow!("{}", e))?;
    ctx.repos
        .admins
        .insert(&Admin::new(seed.mail.clone(), password_hash))
        .await?;
    info!("Created admin account {}", seed.mail);
    Ok(())
}
