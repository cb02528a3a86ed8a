use super::IAdminRepo;
use crate::repos::shared::{inmemory_db::InMemoryDatabase, inmemory_repo::*};
use birthdays_domain::Admin;
use std::sync::Arc;

pub struct InMemoryAdminRepo {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryAdminRepo {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl IAdminRepo for InMemoryAdminRepo {
    async fn insert(&self, admin: &Admin) -> anyhow::Result<()> {
        insert(admin, &self.db.admins);
        Ok(())
    }

    async fn find_by_mail(&self, mail: &str) -> Option<Admin> {
        find_by(&self.db.admins, |a| a.mail == mail).into_iter().next()
    }
}
