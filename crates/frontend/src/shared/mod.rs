pub mod notifications;
pub mod settings;
pub mod storage;
pub mod theme;
