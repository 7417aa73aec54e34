// Adapters layer: concrete implementations of the domain ports.

pub mod in_memory;
pub mod mailer;

use crate::config::toml_config::BookingConfig;
use in_memory::{InMemoryParticipationRepository, InMemoryUserRepository, InMemoryWebinarRepository};
use std::sync::Arc;

/// In-memory repositories populated from a seed configuration.
#[derive(Debug, Clone)]
pub struct SeededStore {
    pub webinars: Arc<InMemoryWebinarRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub participations: Arc<InMemoryParticipationRepository>,
}

pub fn seed(config: &BookingConfig) -> SeededStore {
    tracing::debug!(
        "Seeding {} users, {} webinars, {} participations",
        config.users.len(),
        config.webinars.len(),
        config.participations.len()
    );

    SeededStore {
        webinars: Arc::new(InMemoryWebinarRepository::new(config.webinars.clone())),
        users: Arc::new(InMemoryUserRepository::new(config.users.clone())),
        participations: Arc::new(InMemoryParticipationRepository::new(
            config.participations.clone(),
        )),
    }
}
