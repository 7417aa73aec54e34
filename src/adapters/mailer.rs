use crate::core::{Email, Mailer};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Writes outgoing mail to the log instead of a transport.
#[derive(Debug, Clone, Default)]
pub struct TracingMailer {
    sender: Option<String>,
}

impl TracingMailer {
    pub fn new(sender: Option<String>) -> Self {
        Self { sender }
    }

    pub fn sender(&self) -> &str {
        self.sender.as_deref().unwrap_or("noreply@localhost")
    }
}

#[async_trait]
impl Mailer for TracingMailer {
    async fn send(&self, email: Email) -> Result<()> {
        tracing::info!(
            from = self.sender(),
            to = %email.to,
            subject = %email.subject,
            "📧 {}",
            email.body
        );
        Ok(())
    }
}
