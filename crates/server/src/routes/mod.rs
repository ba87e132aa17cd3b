pub mod home;
pub mod summarize;
