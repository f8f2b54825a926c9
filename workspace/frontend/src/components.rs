pub mod home;
pub mod insights;
pub mod layout;
pub mod prediction;
