//! 클럽 DTO

pub mod request;
pub mod response;

pub use request::{ClubQuery, CreateClubRequest, UpdateClubRequest};
pub use response::ClubResponse;
