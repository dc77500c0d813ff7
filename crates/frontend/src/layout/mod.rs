pub mod modal_service;
pub mod navbar;
pub mod settings_modal;

pub use modal_service::ModalService;
