//! 클럽 관리 서비스 모듈

pub mod club_service;

pub use club_service::ClubService;
