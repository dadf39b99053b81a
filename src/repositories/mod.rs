//! 데이터 액세스 계층
//!
//! 서비스는 [`ports`]의 trait에만 의존하고, 실행 시 설정에 따라
//! MongoDB 구현 또는 인메모리 구현이 주입됩니다.
//!
//! | 포트 | MongoDB | 인메모리 |
//! |------|---------|----------|
//! | [`UserStore`] | [`UserRepository`] (+ Redis 캐시) | [`MemoryUserStore`] |
//! | [`DirectoryStore`] | [`DirectoryRepository`] | [`MemoryDirectoryStore`] |

pub mod ports;
pub mod users;
pub mod directory;
pub mod memory;

pub use ports::{
    ClubFilter, DirectoryStore, EventFilter, RosterChange, RosterOutcome, RosterTarget, UserStore,
};
pub use users::UserRepository;
pub use directory::DirectoryRepository;
pub use memory::{MemoryDirectoryStore, MemoryUserStore};
