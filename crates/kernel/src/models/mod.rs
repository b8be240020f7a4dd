//! Database models.

pub mod contact_message;
pub mod service_inquiry;

pub use contact_message::ContactMessage;
pub use service_inquiry::ServiceInquiry;
