mod admin;
mod communication;
mod department;
mod employee;
mod roster;
mod shared;

pub use admin::IAdminRepo;
use admin::{InMemoryAdminRepo, PostgresAdminRepo};
pub use communication::ICommunicationRepo;
use communication::{InMemoryCommunicationRepo, PostgresCommunicationRepo};
pub use department::IDepartmentRepo;
use department::{InMemoryDepartmentRepo, PostgresDepartmentRepo};
pub use employee::IEmployeeRepo;
use employee::{InMemoryEmployeeRepo, PostgresEmployeeRepo};
pub use roster::IRosterRepo;
use roster::{InMemoryRosterRepo, PostgresRosterRepo};
use shared::inmemory_db::InMemoryDatabase;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub employees: Arc<dyn IEmployeeRepo>,
    pub departments: Arc<dyn IDepartmentRepo>,
    pub communications: Arc<dyn ICommunicationRepo>,
    pub admins: Arc<dyn IAdminRepo>,
    pub roster: Arc<dyn IRosterRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB EXECUTING MIGRATION ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB EXECUTING MIGRATION ... [done]");

        Ok(Self {
            employees: Arc::new(PostgresEmployeeRepo::new(pool.clone())),
            departments: Arc::new(PostgresDepartmentRepo::new(pool.clone())),
            communications: Arc::new(PostgresCommunicationRepo::new(pool.clone())),
            admins: Arc::new(PostgresAdminRepo::new(pool.clone())),
            roster: Arc::new(PostgresRosterRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        let db = Arc::new(InMemoryDatabase::default());
        Self {
            employees: Arc::new(InMemoryEmployeeRepo::new(db.clone())),
            departments: Arc::new(InMemoryDepartmentRepo::new(db.clone())),
            communications: Arc::new(InMemoryCommunicationRepo::new(db.clone())),
            admins: Arc::new(InMemoryAdminRepo::new(db.clone())),
            roster: Arc::new(InMemoryRosterRepo::new(db)),
        }
    }
}
