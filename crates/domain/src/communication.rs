use crate::shared::entity::{Entity, ID};

/// Message templates and reminder delay shared by one or more `Department`s
#[derive(Debug, Clone, PartialEq)]
pub struct Communication {
    pub id: ID,
    pub description: String,
    pub birthday_msg: String,
    pub html_birthday_msg: String,
    /// Days before a milestone anniversary the manager is reminded
    pub notification_delay: i32,
}

impl Communication {
    pub const MAX_NOTIFICATION_DELAY: i32 = 30;

    pub fn new(
        description: String,
        birthday_msg: String,
        html_birthday_msg: String,
        notification_delay: i32,
    ) -> Self {
        Self {
            id: Default::default(),
            description,
            birthday_msg,
            html_birthday_msg,
            notification_delay,
        }
    }

    pub fn is_valid_notification_delay(delay: i32) -> bool {
        (0..=Self::MAX_NOTIFICATION_DELAY).contains(&delay)
    }
}

impl Entity<ID> for Communication {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_validates_notification_delay() {
        assert!(Communication::is_valid_notification_delay(0));
        assert!(Communication::is_valid_notification_delay(30));
        assert!(!Communication::is_valid_notification_delay(31));
        assert!(!Communication::is_valid_notification_delay(-1));
    }
}
