use crate::error::BirthdaysError;

pub struct Guard {}

impl Guard {
    /// Fails with the message of a blank mandatory field
    pub fn against_blank(val: &str, message: &str) -> Result<(), BirthdaysError> {
        if val.trim().is_empty() {
            Err(BirthdaysError::BadClientData(message.into()))
        } else {
            Ok(())
        }
    }
}
