use crate::core::{
    Email, Executable, Mailer, Participation, ParticipationRepository, User, UserRepository,
    Webinar, WebinarRepository,
};
use crate::utils::error::{BookingError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const NOTIFICATION_SUBJECT: &str = "New subscription to your webinar";

#[derive(Debug, Clone)]
pub struct BookSeatRequest {
    pub webinar_id: String,
    pub user: User,
}

/// What to do when the organizer notification fails after the seat was saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPolicy {
    /// Surface the failure to the caller as `BookingError::Notification`.
    #[default]
    Propagate,
    /// Log the failure and report the booking as successful.
    #[serde(alias = "log")]
    LogAndContinue,
}

pub struct BookSeat<P, U, W, M>
where
    P: ParticipationRepository,
    U: UserRepository,
    W: WebinarRepository,
    M: Mailer,
{
    participations: Arc<P>,
    users: Arc<U>,
    webinars: Arc<W>,
    mailer: Arc<M>,
    notification_policy: NotificationPolicy,
}

impl<P, U, W, M> BookSeat<P, U, W, M>
where
    P: ParticipationRepository,
    U: UserRepository,
    W: WebinarRepository,
    M: Mailer,
{
    pub fn new(participations: Arc<P>, users: Arc<U>, webinars: Arc<W>, mailer: Arc<M>) -> Self {
        Self {
            participations,
            users,
            webinars,
            mailer,
            notification_policy: NotificationPolicy::default(),
        }
    }

    pub fn with_notification_policy(mut self, policy: NotificationPolicy) -> Self {
        self.notification_policy = policy;
        self
    }

    pub fn notification_policy(&self) -> NotificationPolicy {
        self.notification_policy
    }

    /// Organizer lookup and delivery share one failure policy: neither may hide a recorded seat.
    async fn notify_organizer(&self, webinar: &Webinar) -> Result<()> {
        let Err(e) = self.send_notification(webinar).await else {
            return Ok(());
        };

        match self.notification_policy {
            NotificationPolicy::Propagate => match e {
                notification @ BookingError::Notification { .. } => Err(notification),
                other => Err(BookingError::Notification {
                    message: other.to_string(),
                }),
            },
            NotificationPolicy::LogAndContinue => {
                tracing::error!(
                    "Failed to notify organizer {} of webinar {}: {}",
                    webinar.organizer_id,
                    webinar.id,
                    e
                );
                Ok(())
            }
        }
    }

    async fn send_notification(&self, webinar: &Webinar) -> Result<()> {
        let Some(organizer) = self.users.find_by_id(&webinar.organizer_id).await? else {
            tracing::warn!(
                "Organizer {} of webinar {} not found, skipping notification",
                webinar.organizer_id,
                webinar.id
            );
            return Ok(());
        };

        let email = subscription_email(&organizer, webinar);
        tracing::debug!("Notifying organizer {} at {}", organizer.id, email.to);
        self.mailer.send(email).await
    }
}

#[async_trait]
impl<P, U, W, M> Executable<BookSeatRequest, ()> for BookSeat<P, U, W, M>
where
    P: ParticipationRepository,
    U: UserRepository,
    W: WebinarRepository,
    M: Mailer,
{
    async fn execute(&self, request: BookSeatRequest) -> Result<()> {
        let BookSeatRequest { webinar_id, user } = request;
        tracing::debug!("Booking seat on webinar {} for user {}", webinar_id, user.id);

        let webinar = self
            .webinars
            .find_by_id(&webinar_id)
            .await?
            .ok_or_else(|| BookingError::WebinarNotFound {
                webinar_id: webinar_id.clone(),
            })?;

        let existing = self.participations.find_by_webinar_id(&webinar.id).await?;

        if let Err(e) = check_booking(&webinar, &existing, &user) {
            tracing::warn!(
                "Booking rejected for user {} on webinar {}: {}",
                user.id,
                webinar.id,
                e
            );
            return Err(e);
        }

        self.participations
            .save(Participation::new(user.id.as_str(), webinar.id.as_str()))
            .await?;
        tracing::info!(
            "User {} booked a seat on webinar {} ({}/{} seats taken)",
            user.id,
            webinar.id,
            existing.len() + 1,
            webinar.seats
        );

        self.notify_organizer(&webinar).await
    }
}

/// Duplicate check first, then capacity: a user who already holds a seat is
/// told so even when the webinar is full.
pub fn check_booking(webinar: &Webinar, existing: &[Participation], user: &User) -> Result<()> {
    if existing.iter().any(|p| p.user_id == user.id) {
        return Err(BookingError::DuplicateBooking {
            user_id: user.id.clone(),
            webinar_id: webinar.id.clone(),
        });
    }

    if webinar.is_full(existing.len()) {
        return Err(BookingError::WebinarFull {
            webinar_id: webinar.id.clone(),
            seats: webinar.seats,
        });
    }

    Ok(())
}

pub fn subscription_email(organizer: &User, webinar: &Webinar) -> Email {
    Email {
        to: organizer.email.clone(),
        subject: NOTIFICATION_SUBJECT.to_string(),
        body: format!(
            "A new user has subscribed to your webinar \"{}\"",
            webinar.title
        ),
    }
}
