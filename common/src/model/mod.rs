pub mod demo_request;
pub mod legal_document;
pub mod list;
pub mod subscriber;
pub mod user;

mod id;

pub use id::RecordId;
