//! # Service Registry
//!
//! 타입 기반 서비스 로케이터입니다. 애플리케이션 시작 시점에 구성된
//! 서비스 인스턴스를 `Arc<T>`로 등록하고, 핸들러와 미들웨어에서
//! `TypeId`로 조회합니다.
//!
//! ## 등록과 조회
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//!
//! // main.rs - 스토어 구성 후 서비스 등록
//! ServiceLocator::set(Arc::new(ClubService::new(directory.clone())));
//!
//! // handlers - 요청마다 조회
//! let service = ClubService::instance()?;
//! ```
//!
//! ## 설계
//!
//! - 각 타입당 정확히 하나의 인스턴스만 보관합니다 (같은 타입을 다시 `set`하면 교체).
//! - 조회는 읽기 잠금만 사용하므로 요청 경로에서 경합이 거의 없습니다.
//! - 등록되지 않은 타입 조회는 패닉 대신 `AppError::InternalError`를 반환합니다.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use once_cell::sync::Lazy;
use crate::core::errors::{AppError, AppResult};

/// 전역 서비스 로케이터
///
/// `TypeId`를 키로 `Arc<dyn Any + Send + Sync>`를 보관합니다.
/// 모든 메서드는 연관 함수이며 내부의 전역 인스턴스를 사용합니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 등록되어 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        log::info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 인스턴스를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해당 타입이 등록되지 않은 경우
    pub fn get<T: 'static + Send + Sync>() -> AppResult<Arc<T>> {
        Self::try_get::<T>().ok_or_else(|| {
            let type_name = std::any::type_name::<T>();
            log::error!("❌ Service not registered: {}", type_name);
            AppError::InternalError(format!(
                "{} 서비스가 등록되지 않았습니다",
                Self::extract_clean_type_name(type_name)
            ))
        })
    }

    /// 등록된 인스턴스가 있으면 반환합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 해당 타입이 등록되어 있는지 확인합니다.
    pub fn contains<T: 'static + Send + Sync>() -> bool {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.contains_key(&TypeId::of::<T>())
    }

    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }
}
