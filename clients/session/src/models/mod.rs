//! Data models for the session and provider layer

mod awards;
mod user;
mod video_upload;

pub use awards::{AwardFilm, AwardFilmmaker, HallOfFame, MonthlyWinners, Timeframe, YearWinners};
pub use user::{AuthResponse, ProfileUpdate, SignupRequest, SubscriptionTier, User};
pub use video_upload::VideoUpload;
