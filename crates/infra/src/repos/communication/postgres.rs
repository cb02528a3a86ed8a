use super::ICommunicationRepo;
use birthdays_domain::{Communication, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

const INSERT_COMMUNICATION: &str = r#"
    INSERT INTO communications(communication_uid, description, birthday_msg, html_birthday_msg, notification_delay)
    VALUES($1, $2, $3, $4, $5)
"#;

const UPDATE_COMMUNICATION: &str = r#"
    UPDATE communications
    SET description = $2,
    birthday_msg = $3,
    html_birthday_msg = $4,
    notification_delay = $5
    WHERE communication_uid = $1
"#;

const SELECT_COMMUNICATION: &str = r#"
    SELECT * FROM communications
    WHERE communication_uid = $1
"#;

const SELECT_COMMUNICATIONS: &str = r#"
    SELECT * FROM communications
    ORDER BY description
"#;

const DELETE_COMMUNICATION: &str = r#"
    DELETE FROM communications
    WHERE communication_uid = $1
    RETURNING *
"#;

pub struct PostgresCommunicationRepo {
    pool: PgPool,
}

impl PostgresCommunicationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommunicationRaw {
    communication_uid: Uuid,
    description: String,
    birthday_msg: String,
    html_birthday_msg: String,
    notification_delay: i32,
}

impl From<CommunicationRaw> for Communication {
    fn from(c: CommunicationRaw) -> Self {
        Self {
            id: c.communication_uid.into(),
            description: c.description,
            birthday_msg: c.birthday_msg,
            html_birthday_msg: c.html_birthday_msg,
            notification_delay: c.notification_delay,
        }
    }
}

impl PostgresCommunicationRepo {
    async fn write(&self, statement: &str, communication: &Communication) -> anyhow::Result<()> {
        sqlx::query(statement)
            .bind(communication.id.inner_ref())
            .bind(&communication.description)
            .bind(&communication.birthday_msg)
            .bind(&communication.html_birthday_msg)
            .bind(communication.notification_delay)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ICommunicationRepo for PostgresCommunicationRepo {
    async fn insert(&self, communication: &Communication) -> anyhow::Result<()> {
        self.write(INSERT_COMMUNICATION, communication).await
    }

    async fn save(&self, communication: &Communication) -> anyhow::Result<()> {
        self.write(UPDATE_COMMUNICATION, communication).await
    }

    async fn find(&self, communication_id: &ID) -> Option<Communication> {
        sqlx::query_as::<_, CommunicationRaw>(SELECT_COMMUNICATION)
            .bind(communication_id.inner_ref())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| error!("Unable to find communication {}: {:?}", communication_id, e))
            .ok()
            .flatten()
            .map(|c| c.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Communication>> {
        let communications = sqlx::query_as::<_, CommunicationRaw>(SELECT_COMMUNICATIONS)
            .fetch_all(&self.pool)
            .await?;
        Ok(communications.into_iter().map(|c| c.into()).collect())
    }

    async fn delete(&self, communication_id: &ID) -> Option<Communication> {
        sqlx::query_as::<_, CommunicationRaw>(DELETE_COMMUNICATION)
            .bind(communication_id.inner_ref())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| error!("Unable to delete communication {}: {:?}", communication_id, e))
            .ok()
            .flatten()
            .map(|c| c.into())
    }
}
