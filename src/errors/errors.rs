//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! OAuth2 프로바이더 연동과 JWT 세션 인증을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | 에러 | 발생 지점 | HTTP 상태 |
//! |------|-----------|-----------|
//! | `OAuth2Exchange` | 토큰 교환/갱신, 사용자 정보 조회, 연결 해제 | 502 |
//! | `OAuth2Transport` | 프로바이더까지 요청이 도달하지 못함 | 502 |
//! | `ProviderResponse` | 성공 응답이지만 본문을 해석할 수 없음 | 502 |
//! | `UnsupportedProvider` | 등록되지 않은 registration id | 404 |
//! | `ValidationError` | 요청 값 누락 또는 형식 오류 | 400 |
//! | `InvalidToken` | 세션 토큰 서명 불일치 또는 형식 오류 | 401 |
//! | `AuthenticationError` | 인증 헤더 누락, 콜백 거부, state 불일치 | 401 |
//! | `AuthorizationError` | 다른 프로바이더 계정에 대한 요청 | 403 |
//!
//! 토큰 만료는 에러가 아닙니다. `TokenService::is_expired`가 돌려주는
//! boolean 값으로 호출자가 갱신 여부를 결정합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! let token = client.exchange_code_for_token(&registration, code, state).await
//!     .map_err(|e| {
//!         log::warn!("토큰 교환 실패: {}", e);
//!         e
//!     })?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 프로바이더 엔드포인트가 성공이 아닌 HTTP 상태를 반환함 (502 Bad Gateway)
    ///
    /// 숫자 상태 코드는 그대로 보존됩니다. 코어는 재시도하지 않습니다.
    #[error("{operation} failed [{status}].")]
    OAuth2Exchange {
        operation: &'static str,
        status: u16,
    },

    /// 프로바이더 요청이 HTTP 상태를 받기 전에 실패함 (502 Bad Gateway)
    #[error("{operation} failed: {message}")]
    OAuth2Transport {
        operation: &'static str,
        message: String,
    },

    /// 프로바이더 응답 본문 해석 실패 (502 Bad Gateway)
    #[error("Invalid provider response: {0}")]
    ProviderResponse(String),

    /// 지원하지 않는 OAuth2 프로바이더 (404 Not Found)
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// 세션 토큰 서명 불일치 또는 형식 오류 (401 Unauthorized)
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 요청 값 검증 실패 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 설정 값 누락 또는 형식 오류 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::OAuth2Exchange { .. }
            | AppError::OAuth2Transport { .. }
            | AppError::ProviderResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::UnsupportedProvider(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidToken(_) | AppError::AuthenticationError(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_oauth2_exchange_error_keeps_status() {
        let error = AppError::OAuth2Exchange {
            operation: "Get access token",
            status: 400,
        };

        assert_eq!(error.to_string(), "Get access token failed [400].");
        assert_eq!(error.error_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_invalid_token_response() {
        let error = AppError::InvalidToken("signature mismatch".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_unsupported_provider_response() {
        let error = AppError::UnsupportedProvider("twitter".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_config_error_response() {
        let error = AppError::ConfigError("JWT_SECRET".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
