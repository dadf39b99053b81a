//! 비즈니스 로직을 담당하는 서비스 계층
//!
//! 각 서비스는 시작 시 [`ServiceLocator`](crate::core::registry::ServiceLocator)에
//! 등록되고 핸들러에서 `Service::instance()`로 꺼내 씁니다. 모든 변경 작업은
//! 먼저 인가 정책(`policy::enforce`)을 통과해야 합니다.
//!
//! ```text
//! users/       가입, 로그인 검증, 사용자 관리
//! auth/        JWT 토큰, 비밀번호 해시, 비밀번호 정책
//! clubs/       클럽 CRUD
//! events/      이벤트 CRUD
//! membership/  가입/탈퇴, 참가 신청/취소
//! feedback/    클럽 피드백
//! ```

pub mod users;
pub mod auth;
pub mod clubs;
pub mod events;
pub mod membership;
pub mod feedback;

#[cfg(test)]
pub(crate) mod testing;
