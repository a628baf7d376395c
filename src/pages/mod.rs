pub mod category;
pub mod home;
pub mod not_found;
