//! 이벤트 DTO

pub mod request;
pub mod response;

pub use request::{CreateEventRequest, EventQuery, UpdateEventRequest};
pub use response::EventResponse;
