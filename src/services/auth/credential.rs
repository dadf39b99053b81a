//! 비밀번호 해시 생성/검증
//!
//! 서비스는 [`CredentialVerifier`]만 알고 있으며 해시 알고리즘은 구현체가 결정합니다.

use std::time::Instant;
use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// 단방향 비밀번호 검증기
pub trait CredentialVerifier: Send + Sync {
    fn hash(&self, raw_password: &str) -> AppResult<String>;

    fn verify(&self, raw_password: &str, password_hash: &str) -> AppResult<bool>;
}

/// bcrypt 기반 검증기
///
/// cost는 `BCRYPT_COST` 또는 실행 환경에 따라 정해집니다.
#[derive(Debug, Clone, Copy)]
pub struct BcryptVerifier {
    cost: u32,
}

impl BcryptVerifier {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl CredentialVerifier for BcryptVerifier {
    fn hash(&self, raw_password: &str) -> AppResult<String> {
        let started = Instant::now();
        let hashed = bcrypt::hash(raw_password, self.cost).context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?} (cost {})", started.elapsed(), self.cost);
        Ok(hashed)
    }

    fn verify(&self, raw_password: &str, password_hash: &str) -> AppResult<bool> {
        let started = Instant::now();
        let valid = bcrypt::verify(raw_password, password_hash).context("비밀번호 검증 실패")?;

        log::debug!("Password verification took: {:?}", started.elapsed());
        Ok(valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    #[test]
    fn test_hash_and_verify() {
        let verifier = BcryptVerifier::new(4);
        let hashed = verifier.hash("correct horse").unwrap();

        assert_ne!(hashed, "correct horse");
        assert!(verifier.verify("correct horse", &hashed).unwrap());
        assert!(!verifier.verify("wrong horse", &hashed).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_internal_error() {
        let verifier = BcryptVerifier::new(4);
        assert!(matches!(
            verifier.verify("anything", "not-a-bcrypt-hash"),
            Err(AppError::InternalError(_))
        ));
    }
}
