use crate::domain::model::{Email, Participation, User, Webinar};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A single application-level operation.
#[async_trait]
pub trait Executable<Req, Res>: Send + Sync
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    async fn execute(&self, request: Req) -> Result<Res>;
}

#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// `None` when no webinar has this id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Webinar>>;
    async fn create(&self, webinar: Webinar) -> Result<()>;
}

#[async_trait]
pub trait ParticipationRepository: Send + Sync {
    async fn find_by_webinar_id(&self, webinar_id: &str) -> Result<Vec<Participation>>;
    /// Stores the record as given; uniqueness is not checked here.
    async fn save(&self, participation: Participation) -> Result<()>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;
    async fn create(&self, user: User) -> Result<()>;
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Email) -> Result<()>;
}
