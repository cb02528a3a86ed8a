use crate::shared::entity::{Entity, ID};

/// HR administrator allowed to log in and use the protected routes
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: ID,
    pub mail: String,
    /// argon2 PHC string
    pub password_hash: String,
}

impl Admin {
    pub fn new(mail: String, password_hash: String) -> Self {
        Self {
            id: Default::default(),
            mail,
            password_hash,
        }
    }
}

impl Entity<ID> for Admin {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
