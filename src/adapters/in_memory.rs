use crate::core::{
    Email, Mailer, Participation, ParticipationRepository, User, UserRepository, Webinar,
    WebinarRepository,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryWebinarRepository {
    database: RwLock<Vec<Webinar>>,
}

impl InMemoryWebinarRepository {
    pub fn new(webinars: Vec<Webinar>) -> Self {
        Self {
            database: RwLock::new(webinars),
        }
    }

    pub async fn snapshot(&self) -> Vec<Webinar> {
        self.database.read().await.clone()
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Webinar>> {
        let database = self.database.read().await;
        Ok(database.iter().find(|w| w.id == id).cloned())
    }

    async fn create(&self, webinar: Webinar) -> Result<()> {
        self.database.write().await.push(webinar);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    database: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            database: RwLock::new(users),
        }
    }

    pub async fn snapshot(&self) -> Vec<User> {
        self.database.read().await.clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let database = self.database.read().await;
        Ok(database.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: User) -> Result<()> {
        self.database.write().await.push(user);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryParticipationRepository {
    database: RwLock<Vec<Participation>>,
}

impl InMemoryParticipationRepository {
    pub fn new(participations: Vec<Participation>) -> Self {
        Self {
            database: RwLock::new(participations),
        }
    }

    pub async fn snapshot(&self) -> Vec<Participation> {
        self.database.read().await.clone()
    }
}

#[async_trait]
impl ParticipationRepository for InMemoryParticipationRepository {
    async fn find_by_webinar_id(&self, webinar_id: &str) -> Result<Vec<Participation>> {
        let database = self.database.read().await;
        Ok(database
            .iter()
            .filter(|p| p.webinar_id == webinar_id)
            .cloned()
            .collect())
    }

    async fn save(&self, participation: Participation) -> Result<()> {
        self.database.write().await.push(participation);
        Ok(())
    }
}

/// Records every email instead of delivering it.
#[derive(Debug, Default)]
pub struct InMemoryMailer {
    sent: RwLock<Vec<Email>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent_emails(&self) -> Vec<Email> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, email: Email) -> Result<()> {
        self.sent.write().await.push(email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_participations_filtered_by_webinar() {
        let repo = InMemoryParticipationRepository::new(vec![
            Participation::new("user-bob", "webinar-1"),
            Participation::new("user-carol", "webinar-2"),
        ]);
        repo.save(Participation::new("user-dave", "webinar-1"))
            .await
            .unwrap();

        let found = repo.find_by_webinar_id("webinar-1").await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.webinar_id == "webinar-1"));
        assert!(repo.find_by_webinar_id("webinar-3").await.unwrap().is_empty());
        assert_eq!(repo.snapshot().await.len(), 3);
    }

    #[tokio::test]
    async fn test_save_does_not_enforce_uniqueness() {
        let repo = InMemoryParticipationRepository::default();
        repo.save(Participation::new("user-bob", "webinar-1"))
            .await
            .unwrap();
        repo.save(Participation::new("user-bob", "webinar-1"))
            .await
            .unwrap();
        assert_eq!(repo.find_by_webinar_id("webinar-1").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_user_lookup_returns_none_when_absent() {
        let repo = InMemoryUserRepository::new(vec![User::new(
            "user-alice",
            "alice@example.com",
            "password",
        )]);
        assert!(repo.find_by_id("user-alice").await.unwrap().is_some());
        assert!(repo.find_by_id("user-nobody").await.unwrap().is_none());

        repo.create(User::new("user-bob", "bob@example.com", "password"))
            .await
            .unwrap();
        assert!(repo.find_by_id("user-bob").await.unwrap().is_some());
        assert_eq!(repo.snapshot().await.len(), 2);
    }

    #[tokio::test]
    async fn test_webinar_create_then_find() {
        let repo = InMemoryWebinarRepository::default();
        let webinar = Webinar {
            id: "webinar-1".to_string(),
            organizer_id: "user-alice".to_string(),
            title: "Architecture 101".to_string(),
            start_date: Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 1, 20, 11, 0, 0).unwrap(),
            seats: 2,
        };
        assert!(repo.find_by_id("webinar-1").await.unwrap().is_none());
        repo.create(webinar.clone()).await.unwrap();
        assert_eq!(repo.find_by_id("webinar-1").await.unwrap(), Some(webinar));
    }

    #[tokio::test]
    async fn test_mailer_records_emails() {
        let mailer = InMemoryMailer::new();
        mailer
            .send(Email {
                to: "alice@example.com".to_string(),
                subject: "hello".to_string(),
                body: "world".to_string(),
            })
            .await
            .unwrap();
        let sent = mailer.sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "alice@example.com");
    }
}
