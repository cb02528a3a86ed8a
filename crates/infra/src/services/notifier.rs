use birthdays_domain::notification::{MailMessage, SmsMessage};
use std::sync::Mutex;
use tracing::info;

/// Outbound delivery of birthday wishes and manager reminders
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn send_mail(&self, mail: &MailMessage) -> anyhow::Result<()>;
    async fn send_sms(&self, sms: &SmsMessage) -> anyhow::Result<()>;
}

/// Writes every notification to the log instead of delivering it
pub struct LogNotifier {}

#[async_trait::async_trait]
impl INotifier for LogNotifier {
    async fn send_mail(&self, mail: &MailMessage) -> anyhow::Result<()> {
        info!(to = %mail.to, subject = %mail.subject, "Mail notification");
        Ok(())
    }

    async fn send_sms(&self, sms: &SmsMessage) -> anyhow::Result<()> {
        info!(to = %sms.to, body = %sms.body, "SMS notification");
        Ok(())
    }
}

/// Keeps every notification so that it can be inspected
#[derive(Default)]
pub struct InMemoryNotifier {
    mails: Mutex<Vec<MailMessage>>,
    sms: Mutex<Vec<SmsMessage>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn sent_mails(&self) -> Vec<MailMessage> {
        self.mails
            .lock()
            .map(|mails| mails.clone())
            .unwrap_or_default()
    }

    pub fn sent_sms(&self) -> Vec<SmsMessage> {
        self.sms.lock().map(|sms| sms.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl INotifier for InMemoryNotifier {
    async fn send_mail(&self, mail: &MailMessage) -> anyhow::Result<()> {
        self.mails
            .lock()
            .map_err(|_| anyhow::Error::msg("Mail outbox is poisoned"))?
            .push(mail.clone());
        Ok(())
    }

    async fn send_sms(&self, sms: &SmsMessage) -> anyhow::Result<()> {
        self.sms
            .lock()
            .map_err(|_| anyhow::Error::msg("SMS outbox is poisoned"))?
            .push(sms.clone());
        Ok(())
    }
}
