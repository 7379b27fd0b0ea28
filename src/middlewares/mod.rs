//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! Spring Boot의 Filter와 유사한 역할을 수행합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 세션 토큰 추출 및 서명/만료 검증
//! - 토큰 subject 를 `AuthenticatedUser`로 request extension에 저장
//! - 실패 시 401 JSON (`token_expired` 또는 `authentication_required`)
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .service(
//!         web::scope("/api/oauth2/unlink")
//!             .wrap(AuthMiddleware::required()) // 보호된 라우트에만 강제 인증
//!             .service(handlers::oauth::unlink)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
