use super::ICommunicationRepo;
use crate::repos::shared::{inmemory_db::InMemoryDatabase, inmemory_repo::*};
use birthdays_domain::{Communication, ID};
use std::sync::Arc;

pub struct InMemoryCommunicationRepo {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryCommunicationRepo {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ICommunicationRepo for InMemoryCommunicationRepo {
    async fn insert(&self, communication: &Communication) -> anyhow::Result<()> {
        insert(communication, &self.db.communications);
        Ok(())
    }

    async fn save(&self, communication: &Communication) -> anyhow::Result<()> {
        save(communication, &self.db.communications);
        Ok(())
    }

    async fn find(&self, communication_id: &ID) -> Option<Communication> {
        find(communication_id, &self.db.communications)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Communication>> {
        let mut communications = find_all(&self.db.communications);
        communications.sort_by(|a, b| a.description.cmp(&b.description));
        Ok(communications)
    }

    async fn delete(&self, communication_id: &ID) -> Option<Communication> {
        delete(communication_id, &self.db.communications)
    }
}
