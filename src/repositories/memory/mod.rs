//! 인메모리 저장소
//!
//! `STORAGE_BACKEND=memory`로 실행하거나 테스트에서 사용합니다. 프로세스가 종료되면
//! 데이터는 사라집니다. 모든 확인-후-쓰기는 하나의 쓰기 잠금 안에서 이루어집니다.

pub mod user_store;
pub mod directory_store;

pub use user_store::MemoryUserStore;
pub use directory_store::MemoryDirectoryStore;
