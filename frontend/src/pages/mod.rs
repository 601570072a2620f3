pub mod home;
pub mod legal_document;
pub mod login;
pub mod not_found;
pub mod resource;
