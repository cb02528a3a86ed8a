use super::IDepartmentRepo;
use birthdays_domain::{Department, Membership, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

const INSERT_DEPARTMENT: &str = r#"
    INSERT INTO departments(department_uid, name, notify_by_sms, notify_by_mail, manager_uid, communication_uid)
    VALUES($1, $2, $3, $4, $5, $6)
"#;

const UPDATE_DEPARTMENT: &str = r#"
    UPDATE departments
    SET name = $2,
    notify_by_sms = $3,
    notify_by_mail = $4,
    manager_uid = $5,
    communication_uid = $6
    WHERE department_uid = $1
"#;

const DELETE_MEMBERS: &str = r#"
    DELETE FROM memberships
    WHERE department_uid = $1
"#;

const INSERT_MEMBER: &str = r#"
    INSERT INTO memberships(department_uid, employee_uid)
    VALUES($1, $2)
"#;

const SELECT_DEPARTMENT: &str = r#"
    SELECT * FROM departments
    WHERE department_uid = $1
"#;

const SELECT_DEPARTMENTS_BY_IDS: &str = r#"
    SELECT * FROM departments
    WHERE department_uid = ANY($1)
"#;

const SELECT_DEPARTMENT_BY_NAME: &str = r#"
    SELECT * FROM departments
    WHERE name = $1
"#;

const SELECT_DEPARTMENTS: &str = r#"
    SELECT * FROM departments
    ORDER BY name
"#;

const SELECT_DEPARTMENTS_BY_MANAGER: &str = r#"
    SELECT * FROM departments
    WHERE manager_uid = $1
"#;

const SELECT_DEPARTMENTS_BY_COMMUNICATION: &str = r#"
    SELECT * FROM departments
    WHERE communication_uid = $1
"#;

const SELECT_MEMBERSHIPS: &str = r#"
    SELECT department_uid, employee_uid FROM memberships
"#;

const DELETE_DEPARTMENT: &str = r#"
    DELETE FROM departments
    WHERE department_uid = $1
    RETURNING *
"#;

pub struct PostgresDepartmentRepo {
    pool: PgPool,
}

impl PostgresDepartmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DepartmentRaw {
    department_uid: Uuid,
    name: String,
    notify_by_sms: bool,
    notify_by_mail: bool,
    manager_uid: Uuid,
    communication_uid: Uuid,
}

impl From<DepartmentRaw> for Department {
    fn from(d: DepartmentRaw) -> Self {
        Self {
            id: d.department_uid.into(),
            name: d.name,
            notify_by_sms: d.notify_by_sms,
            notify_by_mail: d.notify_by_mail,
            manager_id: d.manager_uid.into(),
            communication_id: d.communication_uid.into(),
        }
    }
}

#[derive(Debug, FromRow)]
struct MembershipRaw {
    department_uid: Uuid,
    employee_uid: Uuid,
}

impl From<MembershipRaw> for Membership {
    fn from(m: MembershipRaw) -> Self {
        Self {
            department_id: m.department_uid.into(),
            employee_id: m.employee_uid.into(),
        }
    }
}

impl PostgresDepartmentRepo {
    async fn write(
        &self,
        statement: &str,
        department: &Department,
        employee_ids: &[ID],
    ) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(statement)
            .bind(department.id.inner_ref())
            .bind(&department.name)
            .bind(department.notify_by_sms)
            .bind(department.notify_by_mail)
            .bind(department.manager_id.inner_ref())
            .bind(department.communication_id.inner_ref())
            .execute(&mut *tx)
            .await?;

        sqlx::query(DELETE_MEMBERS)
            .bind(department.id.inner_ref())
            .execute(&mut *tx)
            .await?;

        for employee_id in employee_ids {
            sqlx::query(INSERT_MEMBER)
                .bind(department.id.inner_ref())
                .bind(employee_id.inner_ref())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find_many_by(&self, statement: &str, id: &ID) -> Vec<Department> {
        sqlx::query_as::<_, DepartmentRaw>(statement)
            .bind(id.inner_ref())
            .fetch_all(&self.pool)
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|d| d.into())
            .collect()
    }
}

#[async_trait::async_trait]
impl IDepartmentRepo for PostgresDepartmentRepo {
    async fn insert(&self, department: &Department, employee_ids: &[ID]) -> anyhow::Result<()> {
        self.write(INSERT_DEPARTMENT, department, employee_ids).await
    }

    async fn save(&self, department: &Department, employee_ids: &[ID]) -> anyhow::Result<()> {
        self.write(UPDATE_DEPARTMENT, department, employee_ids).await
    }

    async fn find(&self, department_id: &ID) -> Option<Department> {
        sqlx::query_as::<_, DepartmentRaw>(SELECT_DEPARTMENT)
            .bind(department_id.inner_ref())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| error!("Unable to find department {}: {:?}", department_id, e))
            .ok()
            .flatten()
            .map(|d| d.into())
    }

    async fn find_many(&self, department_ids: &[ID]) -> anyhow::Result<Vec<Department>> {
        let ids = department_ids
            .iter()
            .map(|id| *id.inner_ref())
            .collect::<Vec<_>>();
        let departments = sqlx::query_as::<_, DepartmentRaw>(SELECT_DEPARTMENTS_BY_IDS)
            .bind(&ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(departments.into_iter().map(|d| d.into()).collect())
    }

    async fn find_by_name(&self, name: &str) -> Option<Department> {
        sqlx::query_as::<_, DepartmentRaw>(SELECT_DEPARTMENT_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| error!("Unable to find department named {}: {:?}", name, e))
            .ok()
            .flatten()
            .map(|d| d.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Department>> {
        let departments = sqlx::query_as::<_, DepartmentRaw>(SELECT_DEPARTMENTS)
            .fetch_all(&self.pool)
            .await?;
        Ok(departments.into_iter().map(|d| d.into()).collect())
    }

    async fn find_by_manager(&self, employee_id: &ID) -> Vec<Department> {
        self.find_many_by(SELECT_DEPARTMENTS_BY_MANAGER, employee_id)
            .await
    }

    async fn find_by_communication(&self, communication_id: &ID) -> Vec<Department> {
        self.find_many_by(SELECT_DEPARTMENTS_BY_COMMUNICATION, communication_id)
            .await
    }

    async fn find_memberships(&self) -> anyhow::Result<Vec<Membership>> {
        let memberships = sqlx::query_as::<_, MembershipRaw>(SELECT_MEMBERSHIPS)
            .fetch_all(&self.pool)
            .await?;
        Ok(memberships.into_iter().map(|m| m.into()).collect())
    }

    async fn delete(&self, department_id: &ID) -> Option<Department> {
        sqlx::query_as::<_, DepartmentRaw>(DELETE_DEPARTMENT)
            .bind(department_id.inner_ref())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| error!("Unable to delete department {}: {:?}", department_id, e))
            .ok()
            .flatten()
            .map(|d| d.into())
    }
}
