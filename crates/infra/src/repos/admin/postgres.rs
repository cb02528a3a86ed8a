use super::IAdminRepo;
use birthdays_domain::Admin;
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

const INSERT_ADMIN: &str = r#"
    INSERT INTO admins(admin_uid, mail, password_hash)
    VALUES($1, $2, $3)
"#;

const SELECT_ADMIN_BY_MAIL: &str = r#"
    SELECT * FROM admins
    WHERE mail = $1
"#;

pub struct PostgresAdminRepo {
    pool: PgPool,
}

impl PostgresAdminRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdminRaw {
    admin_uid: Uuid,
    mail: String,
    password_hash: String,
}

impl From<AdminRaw> for Admin {
    fn from(a: AdminRaw) -> Self {
        Self {
            id: a.admin_uid.into(),
            mail: a.mail,
            password_hash: a.password_hash,
        }
    }
}

#[async_trait::async_trait]
impl IAdminRepo for PostgresAdminRepo {
    async fn insert(&self, admin: &Admin) -> anyhow::Result<()> {
        sqlx::query(INSERT_ADMIN)
            .bind(admin.id.inner_ref())
            .bind(&admin.mail)
            .bind(&admin.password_hash)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_mail(&self, mail: &str) -> Option<Admin> {
        sqlx::query_as::<_, AdminRaw>(SELECT_ADMIN_BY_MAIL)
            .bind(mail)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| error!("Unable to find admin {}: {:?}", mail, e))
            .ok()
            .flatten()
            .map(|a| a.into())
    }
}
