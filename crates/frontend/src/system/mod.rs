pub mod auth;
pub mod vitals;
