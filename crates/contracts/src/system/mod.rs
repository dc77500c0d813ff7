pub mod identity;
pub mod vitals;
