//! 세션 인증 서비스 모듈
//!
//! 자체 발급하는 JWT 세션 토큰을 담당합니다.
//!
//! # Security
//!
//! - HMAC(HS256/HS384/HS512) 토큰 서명
//! - 서명 불일치와 형식 오류는 모두 `AppError::InvalidToken`
//! - 만료는 에러가 아닌 boolean 판정 (`is_expired`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let tokens = token_service.issue_token_pair("google:1234")?;
//! assert!(token_service.validate(&tokens.access_token, "google:1234"));
//! ```

pub mod token_service;

pub use token_service::*;
