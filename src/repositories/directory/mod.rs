//! 클럽, 이벤트, 피드백을 한 곳에서 다루는 MongoDB 리포지토리
//!
//! 세 컬렉션은 서로를 참조하므로(클럽 삭제 시 이벤트/피드백 연쇄 삭제,
//! 사용자 삭제 시 참조 정리) 하나의 리포지토리가 모두 소유합니다.

pub mod directory_repo;

pub use directory_repo::DirectoryRepository;
