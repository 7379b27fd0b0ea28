//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::AppState;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::auth::TokenService;

/// 인증 실패 사유
#[derive(Debug)]
enum AuthFailure {
    /// 서명은 유효하지만 만료된 토큰
    Expired,
    /// 헤더 누락, 형식 오류, 서명 불일치
    Rejected(AppError),
}

impl AuthFailure {
    fn error_code(&self) -> &'static str {
        match self {
            AuthFailure::Expired => "token_expired",
            AuthFailure::Rejected(_) => "authentication_required",
        }
    }
}

impl From<AppError> for AuthFailure {
    fn from(err: AppError) -> Self {
        AuthFailure::Rejected(err)
    }
}

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
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

        Box::pin(async move {
            let auth_result = match req.app_data::<web::Data<AppState>>() {
                Some(state) => authenticate(&req, &state.token_service),
                None => Err(AuthFailure::Rejected(AppError::InternalError(
                    "AppState 가 등록되지 않았습니다".to_string(),
                ))),
            };

            match auth_result {
                Ok(user) => {
                    log::debug!("인증 성공: subject {}", user.subject);
                    req.extensions_mut().insert(user);
                }
                Err(failure) => {
                    log::warn!("인증 실패: {:?}", failure);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": failure.error_code(),
                            "message": "유효한 인증 토큰이 필요합니다"
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 세션 토큰을 추출하고 검증
fn authenticate(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthenticatedUser, AuthFailure> {
    // Authorization 헤더 추출
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    // Bearer 토큰 추출
    let token = token_service.extract_bearer_token(auth_header)?;

    // 서명 검증 후 만료 확인
    let subject = token_service.extract_subject(token)?;
    if token_service.is_expired(token)? {
        return Err(AuthFailure::Expired);
    }

    Ok(AuthenticatedUser { subject })
}
