pub mod admin;
pub mod browse;
pub mod login;
pub mod not_found;
