//! # 사용자 관리 서비스 구현
//!
//! 회원 가입, 자격 증명 검증, 조회, 수정, 삭제를 담당합니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         UserService                          │
//! │                                                              │
//! │  register ── password2 확인 ─▶ 형식 검증 ─▶ create_user      │
//! │  create_user ── 이메일 정규화 ─▶ 비밀번호 정책 ─▶ 해시 ─▶ 저장 │
//! │  verify_credential ── 조회 ─▶ 해시 비교 ─▶ 활성 여부         │
//! │  update / delete ── 정책 ─▶ 본인/ADMIN 확인 ─▶ 저장소        │
//! └──────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//!          dyn UserStore                 dyn DirectoryStore
//!                                        (삭제 시 참조 정리)
//! ```
//!
//! ## 보안
//!
//! - 알 수 없는 이메일과 틀린 비밀번호는 같은 메시지로 거부합니다.
//! - 비밀번호는 [`CredentialVerifier`]를 통해 해시로만 저장합니다.
//! - ADMIN이 아닌 사용자는 자기 자신의 이름과 비밀번호만 바꿀 수 있습니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::domain::dto::users::request::check_password_confirmation;
use crate::domain::dto::{RegisterRequest, UpdateUserRequest};
use crate::domain::entities::users::{User, UserChanges, UserRole};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::policy::{enforce, Action, ResourceKind};
use crate::repositories::ports::{DirectoryStore, UserStore};
use crate::services::auth::credential::CredentialVerifier;
use crate::services::auth::password_policy::check_password_strength;
use crate::utils::string_utils::{clean_optional_string, normalize_email, parse_object_id, validate_required_string};

const INVALID_CREDENTIALS: &str = "잘못된 이메일 또는 비밀번호입니다";

/// 새 계정 정보 (비밀번호는 평문)
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

pub struct UserService {
    users: Arc<dyn UserStore>,
    directory: Arc<dyn DirectoryStore>,
    hasher: Arc<dyn CredentialVerifier>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserStore>,
        directory: Arc<dyn DirectoryStore>,
        hasher: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self { users, directory, hasher }
    }

    pub fn instance() -> AppResult<Arc<Self>> {
        ServiceLocator::get::<Self>()
    }

    /// 자기 가입 (`POST /auth/register`, `POST /users`)
    ///
    /// `password2` 확인은 다른 어떤 검사보다 먼저, 저장소에 접근하기 전에 수행합니다.
    pub async fn register(&self, actor: Option<&AuthenticatedUser>, mut request: RegisterRequest) -> AppResult<User> {
        enforce(actor, Action::Create, ResourceKind::User)?;
        request.check_confirmation()?;

        request.email = normalize_email(&request.email);
        request.validate()?;

        self.create_user(NewAccount {
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            role: request.role.unwrap_or_default(),
        })
        .await
    }

    /// 비밀번호 정책을 적용해 사용자를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 빈 이름, `weak_password`
    /// * `DuplicateError` - 이미 사용 중인 이메일
    pub async fn create_user(&self, account: NewAccount) -> AppResult<User> {
        let email = normalize_email(&account.email);
        check_password_strength(&account.password, &email)?;

        self.store_account(email, account).await
    }

    /// 비밀번호 정책 없이 계정을 생성합니다. 테스트 데이터 적재 전용입니다.
    pub async fn provision_user(&self, account: NewAccount) -> AppResult<User> {
        let email = normalize_email(&account.email);
        self.store_account(email, account).await
    }

    async fn store_account(&self, email: String, account: NewAccount) -> AppResult<User> {
        if email.is_empty() {
            return Err(AppError::ValidationError("이메일을 입력해주세요".to_string()));
        }
        let first_name = validate_required_string(&account.first_name, "first_name")?;
        let last_name = validate_required_string(&account.last_name, "last_name")?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::DuplicateError("이미 사용 중인 이메일입니다".to_string()));
        }

        let password_hash = self.hasher.hash(&account.password)?;
        let user = User::new(email, first_name, last_name, password_hash, account.role);
        let created = self.users.insert(user).await?;

        log::info!(
            "👤 사용자 생성: {} ({})",
            created.email,
            created.role.as_str()
        );
        Ok(created)
    }

    /// 이메일과 비밀번호를 검증합니다.
    ///
    /// 알 수 없는 이메일, 틀린 비밀번호, 비활성 계정은 모두 `AuthenticationError`입니다.
    pub async fn verify_credential(&self, email: &str, raw_password: &str) -> AppResult<User> {
        let email = normalize_email(email);

        let Some(user) = self.users.find_by_email(&email).await? else {
            log::warn!("🔒 로그인 실패 (알 수 없는 이메일): {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        if !self.hasher.verify(raw_password, &user.password_hash)? {
            log::warn!("🔒 로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        if !user.is_active {
            log::warn!("🔒 로그인 실패 (비활성 계정): {}", email);
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
        }

        Ok(user)
    }

    /// 토큰 주체로 활성 사용자를 다시 읽어옵니다 (토큰 갱신, `/auth/me`).
    pub async fn find_active(&self, user_id: &ObjectId) -> AppResult<User> {
        match self.users.find_by_id(user_id).await? {
            Some(user) if user.is_active => Ok(user),
            Some(_) => Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string())),
            None => Err(AppError::AuthenticationError("존재하지 않는 사용자입니다".to_string())),
        }
    }

    pub async fn get(&self, actor: &AuthenticatedUser, id: &str) -> AppResult<User> {
        enforce(Some(actor), Action::Retrieve, ResourceKind::User)?;
        let id = parse_object_id(id, "사용자")?;

        self.users
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    pub async fn list(&self, actor: &AuthenticatedUser) -> AppResult<Vec<User>> {
        enforce(Some(actor), Action::List, ResourceKind::User)?;
        self.users.list().await
    }

    /// 사용자 정보를 부분 수정합니다.
    ///
    /// - ADMIN: 모든 사용자의 모든 필드
    /// - 그 외: 본인의 이름과 비밀번호만 (역할/활성 여부 변경 불가)
    /// - 비밀번호 변경 시 `password2` 확인과 비밀번호 정책을 적용
    pub async fn update(&self, actor: &AuthenticatedUser, id: &str, request: UpdateUserRequest) -> AppResult<User> {
        enforce(Some(actor), Action::Update, ResourceKind::User)?;
        let id = parse_object_id(id, "사용자")?;

        let is_admin = actor.has_role(UserRole::Admin);
        if !is_admin {
            if actor.user_id != id {
                log::warn!("🚫 타인 정보 수정 시도: {} → {}", actor.user_id.to_hex(), id.to_hex());
                return Err(AppError::ForbiddenError(
                    "본인의 정보만 수정할 수 있습니다".to_string(),
                ));
            }
            if request.role.is_some() || request.is_active.is_some() {
                return Err(AppError::ForbiddenError(
                    "ADMIN 권한이 필요한 작업입니다".to_string(),
                ));
            }
        }

        request.validate()?;

        let target = self
            .users
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let password_hash = match request.password.as_deref() {
            Some(password) => {
                check_password_confirmation(password, request.password2.as_deref())?;
                check_password_strength(password, &target.email)?;
                Some(self.hasher.hash(password)?)
            }
            None => None,
        };

        let changes = UserChanges {
            first_name: clean_optional_string(request.first_name),
            last_name: clean_optional_string(request.last_name),
            role: request.role,
            password_hash,
            is_active: request.is_active,
        };

        if changes.is_empty() {
            return Ok(target);
        }

        self.users
            .update(&id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 사용자를 삭제하고 다른 엔티티의 참조를 정리합니다.
    pub async fn delete(&self, actor: &AuthenticatedUser, id: &str) -> AppResult<()> {
        enforce(Some(actor), Action::Delete, ResourceKind::User)?;
        let id = parse_object_id(id, "사용자")?;

        // 레코드를 먼저 지워야 이후의 참가 요청이 인증 단계에서 거부됩니다.
        if !self.users.delete(&id).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        self.directory.detach_user(&id).await?;

        log::info!("🗑️ 사용자 삭제: {} (by {})", id.to_hex(), actor.user_id.to_hex());
        Ok(())
    }
}
