//! AuthMiddleware 요청 처리
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use actix_web::http::header::AUTHORIZATION;
use futures_util::future::LocalBoxFuture;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::auth::{AuthMode, AuthenticatedUser};
use crate::services::auth::TokenService;
use crate::services::users::UserService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            match (mode, authenticate(&req).await) {
                (_, Ok(Some(user))) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id.to_hex());
                    req.extensions_mut().insert(user);
                }
                (AuthMode::Optional, Ok(None)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                }
                (AuthMode::Optional, Err(err)) => {
                    log::debug!("선택적 인증: 유효하지 않은 토큰 무시 ({})", err);
                }
                (AuthMode::Required, Ok(None)) => {
                    return Ok(reject(req, AppError::AuthenticationError(
                        "유효한 인증 토큰이 필요합니다".to_string(),
                    )));
                }
                (AuthMode::Required, Err(err)) => {
                    log::warn!("🔒 인증 실패: {} {} - {}", req.method(), req.path(), err);
                    return Ok(reject(req, err));
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest, error: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = error.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

/// Authorization 헤더를 검증하고 토큰 주체를 저장소에서 다시 읽습니다. 헤더가 없으면 `Ok(None)`.
///
/// 삭제되었거나 비활성화된 사용자의 토큰은 만료 전이라도 거부되며,
/// 역할은 토큰 클레임이 아닌 저장된 값을 사용합니다.
async fn authenticate(req: &ServiceRequest) -> AppResult<Option<AuthenticatedUser>> {
    let Some(header) = req.headers().get(AUTHORIZATION) else {
        return Ok(None);
    };

    let header = header
        .to_str()
        .map_err(|_| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))?;

    let token_service = TokenService::instance()?;
    let token = token_service.extract_bearer_token(header)?;
    let claims = token_service.verify_access_token(token)?;

    let user = UserService::instance()?.find_active(&claims.subject_id()?).await?;
    if user.role != claims.role {
        log::info!("토큰 발급 이후 역할 변경: {} ({} → {})", user.email, claims.role.as_str(), user.role.as_str());
    }

    AuthenticatedUser::from_user(&user).map(Some)
}
