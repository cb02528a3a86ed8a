use super::IEmployeeRepo;
use birthdays_domain::{Employee, NaiveDate, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

const INSERT_EMPLOYEE: &str = r#"
    INSERT INTO employees(employee_uid, first_name, last_name, mail, tel_number, date_of_birth, date_of_hire)
    VALUES($1, $2, $3, $4, $5, $6, $7)
"#;

const UPDATE_EMPLOYEE: &str = r#"
    UPDATE employees
    SET first_name = $2,
    last_name = $3,
    mail = $4,
    tel_number = $5,
    date_of_birth = $6,
    date_of_hire = $7
    WHERE employee_uid = $1
"#;

const DELETE_MEMBERSHIPS: &str = r#"
    DELETE FROM memberships
    WHERE employee_uid = $1
"#;

const INSERT_MEMBERSHIP: &str = r#"
    INSERT INTO memberships(department_uid, employee_uid)
    VALUES($1, $2)
"#;

const SELECT_EMPLOYEE: &str = r#"
    SELECT * FROM employees
    WHERE employee_uid = $1
"#;

const SELECT_EMPLOYEES_BY_IDS: &str = r#"
    SELECT * FROM employees
    WHERE employee_uid = ANY($1)
"#;

const SELECT_EMPLOYEES: &str = r#"
    SELECT * FROM employees
    ORDER BY first_name, last_name
"#;

const SELECT_EMPLOYEES_BY_CONTACT: &str = r#"
    SELECT * FROM employees
    WHERE mail = $1 OR tel_number = $2
"#;

const DELETE_EMPLOYEE: &str = r#"
    DELETE FROM employees
    WHERE employee_uid = $1
    RETURNING *
"#;

pub struct PostgresEmployeeRepo {
    pool: PgPool,
}

impl PostgresEmployeeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmployeeRaw {
    employee_uid: Uuid,
    first_name: String,
    last_name: String,
    mail: String,
    tel_number: String,
    date_of_birth: NaiveDate,
    date_of_hire: NaiveDate,
}

impl From<EmployeeRaw> for Employee {
    fn from(e: EmployeeRaw) -> Self {
        Self {
            id: e.employee_uid.into(),
            first_name: e.first_name,
            last_name: e.last_name,
            mail: e.mail,
            tel_number: e.tel_number,
            date_of_birth: e.date_of_birth,
            date_of_hire: e.date_of_hire,
        }
    }
}

impl PostgresEmployeeRepo {
    async fn write(
        &self,
        statement: &str,
        employee: &Employee,
        department_ids: &[ID],
    ) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(statement)
            .bind(employee.id.inner_ref())
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.mail)
            .bind(&employee.tel_number)
            .bind(employee.date_of_birth)
            .bind(employee.date_of_hire)
            .execute(&mut *tx)
            .await?;

        sqlx::query(DELETE_MEMBERSHIPS)
            .bind(employee.id.inner_ref())
            .execute(&mut *tx)
            .await?;

        for department_id in department_ids {
            sqlx::query(INSERT_MEMBERSHIP)
                .bind(department_id.inner_ref())
                .bind(employee.id.inner_ref())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl IEmployeeRepo for PostgresEmployeeRepo {
    async fn insert(&self, employee: &Employee, department_ids: &[ID]) -> anyhow::Result<()> {
        self.write(INSERT_EMPLOYEE, employee, department_ids).await
    }

    async fn save(&self, employee: &Employee, department_ids: &[ID]) -> anyhow::Result<()> {
        self.write(UPDATE_EMPLOYEE, employee, department_ids).await
    }

    async fn find(&self, employee_id: &ID) -> Option<Employee> {
        sqlx::query_as::<_, EmployeeRaw>(SELECT_EMPLOYEE)
            .bind(employee_id.inner_ref())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| error!("Unable to find employee {}: {:?}", employee_id, e))
            .ok()
            .flatten()
            .map(|e| e.into())
    }

    async fn find_many(&self, employee_ids: &[ID]) -> anyhow::Result<Vec<Employee>> {
        let ids = employee_ids
            .iter()
            .map(|id| *id.inner_ref())
            .collect::<Vec<_>>();
        let employees = sqlx::query_as::<_, EmployeeRaw>(SELECT_EMPLOYEES_BY_IDS)
            .bind(&ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(employees.into_iter().map(|e| e.into()).collect())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, EmployeeRaw>(SELECT_EMPLOYEES)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees.into_iter().map(|e| e.into()).collect())
    }

    async fn find_by_mail_or_tel_number(&self, mail: &str, tel_number: &str) -> Vec<Employee> {
        sqlx::query_as::<_, EmployeeRaw>(SELECT_EMPLOYEES_BY_CONTACT)
            .bind(mail)
            .bind(tel_number)
            .fetch_all(&self.pool)
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.into())
            .collect()
    }

    async fn delete(&self, employee_id: &ID) -> Option<Employee> {
        sqlx::query_as::<_, EmployeeRaw>(DELETE_EMPLOYEE)
            .bind(employee_id.inner_ref())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| error!("Unable to delete employee {}: {:?}", employee_id, e))
            .ok()
            .flatten()
            .map(|e| e.into())
    }
}
