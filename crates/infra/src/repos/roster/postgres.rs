use super::IRosterRepo;
use birthdays_domain::{
    roster::{MembershipDetails, RosterRow},
    Communication, Department, Employee, NaiveDate,
};
use sqlx::{types::Uuid, FromRow, PgPool};

const SELECT_ROSTER: &str = r#"
    SELECT
        e.employee_uid, e.first_name, e.last_name, e.mail, e.tel_number, e.date_of_birth, e.date_of_hire,
        d.department_uid, d.name AS department_name, d.notify_by_sms, d.notify_by_mail,
        c.communication_uid, c.description, c.birthday_msg, c.html_birthday_msg, c.notification_delay,
        m.employee_uid AS manager_uid, m.first_name AS manager_first_name, m.last_name AS manager_last_name,
        m.mail AS manager_mail, m.tel_number AS manager_tel_number,
        m.date_of_birth AS manager_date_of_birth, m.date_of_hire AS manager_date_of_hire
    FROM employees AS e
    LEFT JOIN memberships AS ms
        ON ms.employee_uid = e.employee_uid
    LEFT JOIN departments AS d
        ON d.department_uid = ms.department_uid
    LEFT JOIN communications AS c
        ON c.communication_uid = d.communication_uid
    LEFT JOIN employees AS m
        ON m.employee_uid = d.manager_uid
    ORDER BY e.first_name, e.last_name, e.employee_uid, d.name
"#;

pub struct PostgresRosterRepo {
    pool: PgPool,
}

impl PostgresRosterRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RosterRowRaw {
    employee_uid: Uuid,
    first_name: String,
    last_name: String,
    mail: String,
    tel_number: String,
    date_of_birth: NaiveDate,
    date_of_hire: NaiveDate,
    department_uid: Option<Uuid>,
    department_name: Option<String>,
    notify_by_sms: Option<bool>,
    notify_by_mail: Option<bool>,
    communication_uid: Option<Uuid>,
    description: Option<String>,
    birthday_msg: Option<String>,
    html_birthday_msg: Option<String>,
    notification_delay: Option<i32>,
    manager_uid: Option<Uuid>,
    manager_first_name: Option<String>,
    manager_last_name: Option<String>,
    manager_mail: Option<String>,
    manager_tel_number: Option<String>,
    manager_date_of_birth: Option<NaiveDate>,
    manager_date_of_hire: Option<NaiveDate>,
}

impl RosterRowRaw {
    fn membership(&mut self) -> Option<MembershipDetails> {
        let communication = Communication {
            id: self.communication_uid?.into(),
            description: self.description.take()?,
            birthday_msg: self.birthday_msg.take()?,
            html_birthday_msg: self.html_birthday_msg.take()?,
            notification_delay: self.notification_delay?,
        };
        let manager = Employee {
            id: self.manager_uid?.into(),
            first_name: self.manager_first_name.take()?,
            last_name: self.manager_last_name.take()?,
            mail: self.manager_mail.take()?,
            tel_number: self.manager_tel_number.take()?,
            date_of_birth: self.manager_date_of_birth?,
            date_of_hire: self.manager_date_of_hire?,
        };
        let department = Department {
            id: self.department_uid?.into(),
            name: self.department_name.take()?,
            notify_by_sms: self.notify_by_sms?,
            notify_by_mail: self.notify_by_mail?,
            manager_id: manager.id.clone(),
            communication_id: communication.id.clone(),
        };
        Some(MembershipDetails {
            department,
            communication,
            manager,
        })
    }
}

impl From<RosterRowRaw> for RosterRow {
    fn from(mut r: RosterRowRaw) -> Self {
        let membership = r.membership();
        Self {
            employee: Employee {
                id: r.employee_uid.into(),
                first_name: r.first_name,
                last_name: r.last_name,
                mail: r.mail,
                tel_number: r.tel_number,
                date_of_birth: r.date_of_birth,
                date_of_hire: r.date_of_hire,
            },
            membership,
        }
    }
}

#[async_trait::async_trait]
impl IRosterRepo for PostgresRosterRepo {
    async fn find_rows(&self) -> anyhow::Result<Vec<RosterRow>> {
        let rows = sqlx::query_as::<_, RosterRowRaw>(SELECT_ROSTER)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}
