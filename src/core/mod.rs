pub mod book_seat;

pub use crate::domain::model::{Email, Participation, User, Webinar};
pub use crate::domain::ports::{
    Executable, Mailer, ParticipationRepository, UserRepository, WebinarRepository,
};
pub use crate::utils::error::Result;
