//! 클럽 회원 명단과 이벤트 참석자 명단 관리

pub mod membership_service;

pub use membership_service::MembershipService;
