use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::tokens::{ApiResponse, RefreshRequest};
use crate::errors::AppError;

/// 세션 토큰 갱신 API 핸들러
///
/// 유효한 리프레시 토큰의 subject 로 새 토큰 쌍을 발급합니다.
/// 만료된 리프레시 토큰은 재로그인이 필요합니다.
///
/// `POST /api/token/refresh`
#[post("/refresh")]
pub async fn refresh_token_handler(
    state: web::Data<AppState>,
    payload: web::Json<RefreshRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_service = &state.token_service;
    let subject = token_service.extract_subject(&payload.refresh_token)?;

    if !token_service.validate(&payload.refresh_token, &subject) {
        log::info!("만료된 리프레시 토큰 - subject: {}", subject);
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::<()>::error(
            "리프레시 토큰이 만료되었습니다. 다시 로그인하세요".to_string(),
        )));
    }

    let token_pair = token_service.issue_token_pair(&subject)?;
    log::debug!("세션 토큰 갱신 - subject: {}", subject);

    Ok(HttpResponse::Ok().json(ApiResponse::success(token_pair)))
}
