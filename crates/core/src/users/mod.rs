//! Users module - account models, services, and traits.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{
    NewUser, NotificationSettings, ProfileUpdate, User, UserProfile, UserSummary,
};
pub use users_service::{normalize_email, validate_email, validate_password, UserService};
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
