//! OAuth2 소셜 로그인 핸들러
//!
//! # Endpoints
//!
//! - `GET  /api/oauth2/authorize/{provider}` - 프로바이더 동의 화면으로 리다이렉트
//! - `GET  /api/oauth2/callback/{provider}` - 코드 교환, 사용자 정보 조회, 세션 토큰 발급
//! - `POST /api/oauth2/unlink/{provider}` - 프로바이더 연결 해제 (세션 토큰 필요)
//!
//! CSRF 방지용 state 값은 `oauth2_state` 쿠키에 담아 두었다가 콜백에서 비교합니다.

use actix_web::cookie::{time, Cookie, SameSite};
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::oauth::{OAuthCallbackQuery, OAuthLoginResponse, UnlinkRequest};
use crate::domain::dto::tokens::ApiResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::oauth::OAuth2Client;

pub const STATE_COOKIE: &str = "oauth2_state";
const STATE_COOKIE_PATH: &str = "/api/oauth2";
const STATE_COOKIE_MINUTES: i64 = 10;

fn state_cookie(value: String) -> Cookie<'static> {
    Cookie::build(STATE_COOKIE, value)
        .path(STATE_COOKIE_PATH)
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::minutes(STATE_COOKIE_MINUTES))
        .finish()
}

/// 프로바이더 인가 페이지로 리다이렉트
///
/// `GET /api/oauth2/authorize/{provider}`
#[get("/authorize/{provider}")]
pub async fn authorize(
    state: web::Data<AppState>,
    provider: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let registration = state.registrations.get(&provider)?;
    let csrf_state = Uuid::new_v4().to_string();

    let location = OAuth2Client::build_authorization_redirect(&registration, &csrf_state);
    log::debug!("{} 인가 요청 리다이렉트", registration.registration_id);

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .cookie(state_cookie(csrf_state))
        .finish())
}

/// 프로바이더 콜백 처리
///
/// `GET /api/oauth2/callback/{provider}?code={code}&state={state}`
#[get("/callback/{provider}")]
pub async fn callback(
    req: HttpRequest,
    state: web::Data<AppState>,
    provider: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    // 사용자가 동의를 거부했거나 프로바이더 에러
    if let Some(error) = &query.error {
        let error_msg = query
            .error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("{} OAuth 에러: {} - {}", provider, error, error_msg);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }

    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let registration = state.registrations.get(&provider)?;

    match req.cookie(STATE_COOKIE) {
        Some(cookie) if cookie.value() == query.state => {}
        _ => {
            log::warn!("{} 콜백 state 불일치", registration.registration_id);
            return Err(AppError::AuthenticationError(
                "state 값이 일치하지 않습니다".to_string(),
            ));
        }
    }

    let (provider_token, user) = state
        .oauth2_client
        .login(&registration, &query.code, &query.state)
        .await?;

    let token_pair = state.token_service.issue_token_pair(&user.subject())?;

    log::info!("{} 로그인 성공: {}", registration.registration_id, user.subject());

    let mut expired_state = state_cookie(String::new());
    expired_state.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(expired_state)
        .json(OAuthLoginResponse {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            expires_in: token_pair.expires_in,
            token_type: "Bearer",
            user,
            provider_token_expires_at: provider_token.expires_at,
        }))
}

/// 프로바이더 연결 해제
///
/// 세션 토큰의 프로바이더와 경로의 프로바이더가 같아야 합니다.
///
/// `POST /api/oauth2/unlink/{provider}`
#[post("/{provider}")]
pub async fn unlink(
    user: AuthenticatedUser,
    state: web::Data<AppState>,
    provider: web::Path<String>,
    payload: web::Json<UnlinkRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let registration = state.registrations.get(&provider)?;

    if user.registration_id() != Some(registration.registration_id.as_str()) {
        return Err(AppError::AuthorizationError(format!(
            "{} 계정으로 로그인한 세션이 아닙니다",
            registration.registration_id
        )));
    }

    state
        .oauth2_client
        .unlink(&registration, &payload.access_token)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()> {
        success: true,
        data: None,
        message: Some(format!("{} 연결이 해제되었습니다", registration.registration_id)),
    }))
}
